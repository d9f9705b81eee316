use std::path::PathBuf;

use anyhow::{anyhow, Result};
use rolodex_core::domain::ContactId;
use tracing::{debug, warn};

use crate::app::App;
use crate::photo::{PhotoLoader, PhotoRead};

#[derive(Debug)]
pub enum Action {
    SubmitNewContact,
    DeleteContact(ContactId),
    SelectContact(ContactId),
    CloseDetail,
    EditContact,
    SaveContact,
    CancelEdit,
    SubmitNewTag,
    DeleteTag(ContactId, String),
    SubmitNewInteraction,
    LoadPhoto(PathBuf),
    PhotoLoaded(PhotoRead),
}

pub fn execute_action(app: &mut App, photos: &PhotoLoader, action: Action) -> Result<()> {
    match action {
        Action::SubmitNewContact => {
            let name = app.directory.new_contact_draft().name.clone();
            let before = app.directory.len();
            app.update(|directory| directory.submit_new_contact());
            if app.directory.len() > before {
                app.set_status(format!("Added {}", name));
                app.close_add_contact();
                app.select_newest_contact();
            }
        }
        Action::DeleteContact(id) => {
            let name = app.directory.contact(id).map(|contact| contact.name.clone());
            app.update(|directory| directory.delete_contact(id));
            if let Some(name) = name {
                app.set_status(format!("Deleted {}", name));
            }
            app.clamp_selection();
        }
        Action::SelectContact(id) => {
            app.update(|directory| directory.select_contact(id));
            app.clear_error();
        }
        Action::CloseDetail => {
            app.update(|directory| directory.close_detail());
        }
        Action::EditContact => {
            app.update(|directory| directory.edit_contact());
        }
        Action::SaveContact => {
            app.update(|directory| directory.save_contact());
            if let Some(contact) = app.directory.selected_contact() {
                let message = format!("Saved {}", contact.name);
                app.set_status(message);
            }
        }
        Action::CancelEdit => {
            app.update(|directory| directory.cancel_edit());
        }
        Action::SubmitNewTag => {
            let tag = app.directory.new_tag_input().to_string();
            let before = selected_tags(app);
            app.update(|directory| directory.submit_new_tag());
            if selected_tags(app) != before {
                app.set_status(format!("Tagged {}", tag));
            }
        }
        Action::DeleteTag(contact_id, tag) => {
            let count = |app: &App| {
                app.directory
                    .contact(contact_id)
                    .map_or(0, |contact| contact.tags.len())
            };
            let before = count(app);
            app.update(|directory| directory.delete_tag(contact_id, &tag));
            if count(app) < before {
                app.set_status(format!("Removed tag {}", tag));
            }
        }
        Action::SubmitNewInteraction => {
            let count = interaction_count(app);
            app.update(|directory| directory.submit_new_interaction());
            if interaction_count(app) > count {
                app.set_status("Added interaction".to_string());
                app.reset_interaction_form();
            }
        }
        Action::LoadPhoto(path) => {
            let ticket = app
                .directory
                .begin_photo_upload()
                .ok_or_else(|| anyhow!("open the edit form before choosing a photo"))?;
            photos.spawn(ticket, path);
            app.set_status("Reading photo...".to_string());
        }
        Action::PhotoLoaded(read) => {
            let PhotoRead {
                ticket,
                path,
                result,
            } = read;
            let data_uri = result.map_err(|err| {
                warn!(path = %path.display(), error = %err, "photo read failed");
                anyhow!("read photo {}: {}", path.display(), err)
            })?;
            if !app.directory.photo_upload_is_current(&ticket) {
                warn!(
                    path = %path.display(),
                    contact_id = %ticket.contact_id,
                    "photo arrived after its edit session ended"
                );
                return Ok(());
            }
            debug!(path = %path.display(), bytes = data_uri.len(), "photo applied");
            app.update(|directory| directory.complete_photo_upload(ticket, data_uri));
            app.set_status("Photo updated (save to keep it)".to_string());
        }
    }

    Ok(())
}

fn selected_tags(app: &App) -> Option<Vec<String>> {
    app.directory
        .selected_contact()
        .map(|contact| contact.tags.clone())
}

fn interaction_count(app: &App) -> usize {
    app.directory
        .selected_contact()
        .map_or(0, |contact| contact.interactions.len())
}
