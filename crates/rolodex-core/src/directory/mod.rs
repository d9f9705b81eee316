//! The contact directory and the transient view state around it.
//!
//! Every update is a state transition that consumes the current
//! [`Directory`] and returns the next one. Invalid requests (blank name,
//! empty tag, incomplete interaction, nothing selected) are no-ops: the state
//! comes back unchanged and a debug event is emitted.

mod edit;

pub use edit::{ContactField, EditBuffer, UploadTicket};

use tracing::debug;

use crate::domain::{
    push_tag, remove_tag, Contact, ContactDraft, ContactId, InteractionDraft,
    DEFAULT_PROFILE_PICTURE,
};
use crate::dto::{ContactDetailDto, ContactRowDto};
use crate::search::{search, SearchQuery};
use crate::seed::demo_contacts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    contacts: Vec<Contact>,
    selected: Option<ContactId>,
    editing: Option<EditBuffer>,
    new_contact: ContactDraft,
    new_tag: String,
    new_interaction: InteractionDraft,
    search: String,
    edit_sessions: u64,
    profile_picture: String,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_PICTURE)
    }
}

impl Directory {
    /// An empty directory; new contacts get `profile_picture` as their photo.
    pub fn new(profile_picture: &str) -> Self {
        Self {
            contacts: Vec::new(),
            selected: None,
            editing: None,
            new_contact: ContactDraft::default(),
            new_tag: String::new(),
            new_interaction: InteractionDraft::default(),
            search: String::new(),
            edit_sessions: 0,
            profile_picture: profile_picture.to_string(),
        }
    }

    pub fn with_contacts(profile_picture: &str, contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            ..Self::new(profile_picture)
        }
    }

    /// A directory pre-filled with the demo contacts.
    pub fn seeded(profile_picture: &str) -> Self {
        Self::with_contacts(profile_picture, demo_contacts(profile_picture))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn selected_id(&self) -> Option<ContactId> {
        self.selected
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.and_then(|id| self.contact(id))
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn new_contact_draft(&self) -> &ContactDraft {
        &self.new_contact
    }

    pub fn new_tag_input(&self) -> &str {
        &self.new_tag
    }

    pub fn new_interaction_draft(&self) -> &InteractionDraft {
        &self.new_interaction
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn add_contact(mut self, draft: ContactDraft) -> Self {
        match draft.into_contact(&self.profile_picture) {
            Ok(contact) => {
                debug!(id = %contact.id, "contact added");
                self.contacts.push(contact);
            }
            Err(err) => debug!(error = %err, "add contact ignored"),
        }
        self
    }

    #[must_use]
    pub fn set_new_contact(mut self, draft: ContactDraft) -> Self {
        self.new_contact = draft;
        self
    }

    /// Adds the pending "new contact" draft; the draft is cleared only when
    /// the contact was created.
    #[must_use]
    pub fn submit_new_contact(mut self) -> Self {
        let draft = self.new_contact.clone();
        let before = self.contacts.len();
        self = self.add_contact(draft);
        if self.contacts.len() > before {
            self.new_contact = ContactDraft::default();
        }
        self
    }

    #[must_use]
    pub fn delete_contact(mut self, id: ContactId) -> Self {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        if self.contacts.len() == before {
            debug!(%id, "delete contact ignored: not found");
            return self;
        }
        debug!(%id, "contact deleted");
        if self.selected == Some(id) {
            self.selected = None;
            self.editing = None;
        }
        self
    }

    #[must_use]
    pub fn select_contact(mut self, id: ContactId) -> Self {
        if self.contact(id).is_none() {
            debug!(%id, "select ignored: not found");
            return self;
        }
        if self.selected != Some(id) {
            self.editing = None;
        }
        self.selected = Some(id);
        self
    }

    /// Closes the detail view, dropping any uncommitted edits.
    #[must_use]
    pub fn close_detail(mut self) -> Self {
        self.selected = None;
        self.editing = None;
        self
    }

    /// Opens an edit session on a copy of the selected contact.
    #[must_use]
    pub fn edit_contact(mut self) -> Self {
        let Some(contact) = self.selected_contact().cloned() else {
            debug!("edit ignored: no contact selected");
            return self;
        };
        self.edit_sessions += 1;
        self.editing = Some(EditBuffer {
            session: self.edit_sessions,
            contact,
        });
        self
    }

    #[must_use]
    pub fn edit_field(mut self, field: ContactField, value: String) -> Self {
        match self.editing.as_mut() {
            Some(buffer) => field.write(&mut buffer.contact, value),
            None => debug!(?field, "field edit ignored: not editing"),
        }
        self
    }

    /// Commits the edit buffer over the stored contact and leaves edit mode.
    #[must_use]
    pub fn save_contact(mut self) -> Self {
        let Some(buffer) = self.editing.take() else {
            debug!("save ignored: not editing");
            return self;
        };
        let id = buffer.contact.id;
        self = self.commit(buffer.contact);
        if self.contact(id).is_some() {
            self.selected = Some(id);
        }
        self
    }

    #[must_use]
    pub fn cancel_edit(mut self) -> Self {
        self.editing = None;
        self
    }

    /// Starts a photo upload for the open edit session, if any.
    pub fn begin_photo_upload(&self) -> Option<UploadTicket> {
        self.editing.as_ref().map(|buffer| UploadTicket {
            contact_id: buffer.contact.id,
            session: buffer.session,
        })
    }

    pub fn photo_upload_is_current(&self, ticket: &UploadTicket) -> bool {
        self.editing.as_ref().is_some_and(|buffer| {
            buffer.session == ticket.session && buffer.contact.id == ticket.contact_id
        })
    }

    /// Applies a finished photo read. Reads that outlived their edit session
    /// (saved, cancelled, closed, or another contact opened) are dropped.
    #[must_use]
    pub fn complete_photo_upload(mut self, ticket: UploadTicket, data_uri: String) -> Self {
        if !self.photo_upload_is_current(&ticket) {
            debug!(
                contact_id = %ticket.contact_id,
                session = ticket.session,
                "stale photo upload discarded"
            );
            return self;
        }
        if let Some(buffer) = self.editing.as_mut() {
            buffer.contact.profile_picture = data_uri;
        }
        self
    }

    #[must_use]
    pub fn add_tag(self, tag: &str) -> Self {
        let Some(mut contact) = self.selected_contact().cloned() else {
            debug!("add tag ignored: no contact selected");
            return self;
        };
        if !push_tag(&mut contact.tags, tag) {
            debug!("add tag ignored: empty tag");
            return self;
        }
        self.commit(contact)
    }

    #[must_use]
    pub fn set_new_tag(mut self, tag: String) -> Self {
        self.new_tag = tag;
        self
    }

    #[must_use]
    pub fn submit_new_tag(mut self) -> Self {
        if self.new_tag.is_empty() || self.selected_contact().is_none() {
            debug!("submit tag ignored");
            return self;
        }
        let tag = std::mem::take(&mut self.new_tag);
        self.add_tag(&tag)
    }

    #[must_use]
    pub fn delete_tag(self, contact_id: ContactId, tag: &str) -> Self {
        let Some(mut contact) = self.contact(contact_id).cloned() else {
            debug!(%contact_id, "delete tag ignored: contact not found");
            return self;
        };
        let removed = remove_tag(&mut contact.tags, tag);
        debug!(%contact_id, removed, "tag removed");
        self.commit(contact)
    }

    #[must_use]
    pub fn add_interaction(self, draft: InteractionDraft) -> Self {
        let Some(mut contact) = self.selected_contact().cloned() else {
            debug!("add interaction ignored: no contact selected");
            return self;
        };
        match draft.into_interaction() {
            Ok(interaction) => {
                contact.interactions.push(interaction);
                self.commit(contact)
            }
            Err(err) => {
                debug!(error = %err, "add interaction ignored");
                self
            }
        }
    }

    #[must_use]
    pub fn set_new_interaction(mut self, draft: InteractionDraft) -> Self {
        self.new_interaction = draft;
        self
    }

    /// Adds the pending interaction draft, resetting it once appended.
    #[must_use]
    pub fn submit_new_interaction(mut self) -> Self {
        let Some(id) = self.selected else {
            debug!("submit interaction ignored: no contact selected");
            return self;
        };
        let before = self.contact(id).map_or(0, |contact| contact.interactions.len());
        let draft = self.new_interaction.clone();
        self = self.add_interaction(draft);
        let after = self.contact(id).map_or(0, |contact| contact.interactions.len());
        if after > before {
            self.new_interaction = InteractionDraft::default();
        }
        self
    }

    #[must_use]
    pub fn set_search(mut self, query: String) -> Self {
        self.search = query;
        self
    }

    /// Contacts matching `query`, ignoring the stored search string.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        search(&self.contacts, query)
    }

    /// Contacts matching the stored search string, in directory order.
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.search(&self.search)
    }

    pub fn rows(&self) -> Vec<ContactRowDto> {
        let query = SearchQuery::new(&self.search);
        self.contacts
            .iter()
            .filter(|contact| query.matches(contact))
            .map(ContactRowDto::from_contact)
            .collect()
    }

    pub fn selected_detail(&self) -> Option<ContactDetailDto> {
        self.selected_contact().map(ContactDetailDto::from_contact)
    }

    /// Replaces the stored contact with the same id and leaves edit mode.
    /// Unknown ids are dropped rather than inserted.
    fn commit(mut self, updated: Contact) -> Self {
        let id = updated.id;
        match self.contacts.iter_mut().find(|contact| contact.id == id) {
            Some(slot) => {
                *slot = updated;
                debug!(%id, "contact committed");
            }
            None => debug!(%id, "commit dropped: contact no longer exists"),
        }
        self.editing = None;
        self
    }
}
