use std::collections::VecDeque;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rolodex_core::domain::{join_topics, parse_topics, ContactId, InteractionDraft};
use rolodex_core::time::today_date_string;
use rolodex_core::{ContactField, Directory};

use crate::actions::Action;
use crate::util::apply_text_input;

const LIST_EMPTY: &str = "No contacts. Press 'a' to add one.";
const SEARCH_EMPTY: &str = "No contacts match the search. Press 'c' to clear it.";

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    SearchEditing,
    ModalAddContact(AddContactForm),
    Detail(DetailState),
}

#[derive(Debug)]
pub struct App {
    pub mode: Mode,
    pub show_help: bool,
    pub should_quit: bool,
    pub directory: Directory,
    pub selected: usize,
    pub status: Option<String>,
    pub error: Option<String>,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(directory: Directory) -> Self {
        Self {
            mode: Mode::List,
            show_help: false,
            should_quit: false,
            directory,
            selected: 0,
            status: None,
            error: None,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Runs one directory transition in place.
    pub fn update(&mut self, transition: impl FnOnce(Directory) -> Directory) {
        let directory = std::mem::take(&mut self.directory);
        self.directory = transition(directory);
    }

    pub fn empty_hint(&self) -> &'static str {
        if self.directory.search_query().is_empty() {
            LIST_EMPTY
        } else {
            SEARCH_EMPTY
        }
    }

    pub fn selected_contact_id(&self) -> Option<ContactId> {
        self.directory
            .filtered_contacts()
            .get(self.selected)
            .map(|contact| contact.id)
    }

    pub fn clamp_selection(&mut self) {
        let len = self.directory.filtered_contacts().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Moves the row cursor onto the most recently added contact when it is
    /// visible under the current search.
    pub fn select_newest_contact(&mut self) {
        let Some(newest) = self.directory.contacts().last().map(|contact| contact.id) else {
            return;
        };
        if let Some(pos) = self
            .directory
            .filtered_contacts()
            .iter()
            .position(|contact| contact.id == newest)
        {
            self.selected = pos;
        }
        self.clamp_selection();
    }

    pub fn close_add_contact(&mut self) {
        if matches!(self.mode, Mode::ModalAddContact(_)) {
            self.mode = Mode::List;
        }
    }

    pub fn reset_interaction_form(&mut self) {
        if let Mode::Detail(state) = &mut self.mode {
            if let DetailPane::NewInteraction(form) = &mut state.pane {
                *form = InteractionForm::default();
            }
        }
    }

    /// Reconciles the mode with the directory after actions ran: the detail
    /// view closes once its contact is gone and edit panes close once the
    /// edit session has ended.
    pub fn sync_mode(&mut self) {
        let tag_count = self
            .directory
            .selected_contact()
            .map(|contact| contact.tags.len());
        let editing = self.directory.is_editing();
        let Mode::Detail(state) = &mut self.mode else {
            return;
        };
        let Some(tag_count) = tag_count else {
            self.mode = Mode::List;
            self.clamp_selection();
            return;
        };
        if !editing && matches!(state.pane, DetailPane::Edit(_) | DetailPane::PhotoPath(_)) {
            state.pane = DetailPane::View;
        }
        if state.tag_cursor >= tag_count {
            state.tag_cursor = tag_count.saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        let mut mode = std::mem::replace(&mut self.mode, Mode::List);
        match &mut mode {
            Mode::List => {
                if let Some(next) = self.handle_list_key(key) {
                    mode = next;
                }
            }
            Mode::SearchEditing => {
                if let Some(next) = self.handle_search_key(key) {
                    mode = next;
                }
            }
            Mode::ModalAddContact(form) => {
                if let Some(next) = self.handle_add_contact_key(form, key) {
                    mode = next;
                }
            }
            Mode::Detail(state) => {
                if let Some(next) = self.handle_detail_key(state, key) {
                    mode = next;
                }
            }
        }
        self.mode = mode;
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                let len = self.directory.filtered_contacts().len();
                self.selected = len.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_contact_id() {
                    self.enqueue(Action::SelectContact(id));
                    return Some(Mode::Detail(DetailState::default()));
                }
            }
            KeyCode::Char('/') => return Some(Mode::SearchEditing),
            KeyCode::Char('c') => {
                self.update(|directory| directory.set_search(String::new()));
                self.clamp_selection();
            }
            KeyCode::Char('a') => return Some(Mode::ModalAddContact(AddContactForm::default())),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_contact_id() {
                    self.enqueue(Action::DeleteContact(id));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => return Some(Mode::List),
            _ => {
                let mut query = self.directory.search_query().to_string();
                if apply_text_input(&mut query, key) {
                    self.update(|directory| directory.set_search(query));
                    self.selected = 0;
                }
            }
        }
        None
    }

    fn handle_add_contact_key(&mut self, form: &mut AddContactForm, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Esc => return Some(Mode::List),
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_save_focus() {
                    self.enqueue(Action::SubmitNewContact);
                } else if form.is_cancel_focus() {
                    return Some(Mode::List);
                } else {
                    form.focus_next();
                }
            }
            _ => {
                let mut draft = self.directory.new_contact_draft().clone();
                let target = match form.focus {
                    0 => &mut draft.name,
                    1 => &mut draft.email,
                    _ => return None,
                };
                if apply_text_input(target, key) {
                    self.update(|directory| directory.set_new_contact(draft));
                }
            }
        }
        None
    }

    fn handle_detail_key(&mut self, state: &mut DetailState, key: KeyEvent) -> Option<Mode> {
        let Some(contact_id) = self.directory.selected_id() else {
            return Some(Mode::List);
        };
        let mut pane = std::mem::replace(&mut state.pane, DetailPane::View);
        let next = match &mut pane {
            DetailPane::View => return self.handle_detail_view_key(state, contact_id, key),
            DetailPane::Edit(form) => self.handle_edit_key(form, key),
            DetailPane::PhotoPath(prompt) => self.handle_photo_key(prompt, key),
            DetailPane::NewTag => self.handle_new_tag_key(key),
            DetailPane::NewInteraction(form) => self.handle_interaction_key(form, key),
        };
        state.pane = next.unwrap_or(pane);
        None
    }

    fn handle_detail_view_key(
        &mut self,
        state: &mut DetailState,
        contact_id: ContactId,
        key: KeyEvent,
    ) -> Option<Mode> {
        let tags = self
            .directory
            .contact(contact_id)
            .map(|contact| contact.tags.clone())
            .unwrap_or_default();
        match key.code {
            KeyCode::Esc => {
                self.enqueue(Action::CloseDetail);
                return Some(Mode::List);
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => state.tab = state.tab.toggle(),
            KeyCode::Char('e') => {
                self.enqueue(Action::EditContact);
                state.tab = DetailTab::Details;
                state.pane = DetailPane::Edit(EditForm::default());
            }
            KeyCode::Char('t') => {
                state.tab = DetailTab::Details;
                state.pane = DetailPane::NewTag;
            }
            KeyCode::Char('i') => {
                let form = InteractionForm::from_draft(self.directory.new_interaction_draft());
                state.tab = DetailTab::Interactions;
                state.pane = DetailPane::NewInteraction(form);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                state.tag_cursor = state.tag_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if state.tag_cursor + 1 < tags.len() {
                    state.tag_cursor += 1;
                }
            }
            KeyCode::Char('x') => {
                if let Some(tag) = tags.get(state.tag_cursor) {
                    self.enqueue(Action::DeleteTag(contact_id, tag.clone()));
                }
            }
            _ => {}
        }
        None
    }

    fn handle_edit_key(&mut self, form: &mut EditForm, key: KeyEvent) -> Option<DetailPane> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('s')) {
            self.enqueue(Action::SaveContact);
            return Some(DetailPane::View);
        }
        match key.code {
            KeyCode::Esc => {
                self.enqueue(Action::CancelEdit);
                return Some(DetailPane::View);
            }
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_save_focus() {
                    self.enqueue(Action::SaveContact);
                    return Some(DetailPane::View);
                } else if form.is_cancel_focus() {
                    self.enqueue(Action::CancelEdit);
                    return Some(DetailPane::View);
                } else if form.is_photo_focus() {
                    return Some(DetailPane::PhotoPath(PhotoPrompt {
                        path: String::new(),
                        form: form.clone(),
                    }));
                } else if form.field() == Some(ContactField::Notes) {
                    self.edit_active_field(ContactField::Notes, |value| {
                        value.push('\n');
                        true
                    });
                } else {
                    form.focus_next();
                }
            }
            _ => {
                if let Some(field) = form.field() {
                    self.edit_active_field(field, |value| apply_text_input(value, key));
                }
            }
        }
        None
    }

    fn edit_active_field(&mut self, field: ContactField, edit: impl FnOnce(&mut String) -> bool) {
        let Some(buffer) = self.directory.edit_buffer() else {
            return;
        };
        let mut value = field.read(buffer.contact());
        if edit(&mut value) {
            self.update(|directory| directory.edit_field(field, value));
        }
    }

    fn handle_photo_key(&mut self, prompt: &mut PhotoPrompt, key: KeyEvent) -> Option<DetailPane> {
        match key.code {
            KeyCode::Esc => return Some(DetailPane::Edit(prompt.form.clone())),
            KeyCode::Enter => {
                let path = prompt.path.trim();
                if path.is_empty() {
                    self.set_error("photo path is required");
                    return None;
                }
                self.clear_error();
                self.enqueue(Action::LoadPhoto(PathBuf::from(path)));
                return Some(DetailPane::Edit(prompt.form.clone()));
            }
            _ => {
                apply_text_input(&mut prompt.path, key);
            }
        }
        None
    }

    fn handle_new_tag_key(&mut self, key: KeyEvent) -> Option<DetailPane> {
        match key.code {
            KeyCode::Esc => {
                self.update(|directory| directory.set_new_tag(String::new()));
                return Some(DetailPane::View);
            }
            KeyCode::Enter => {
                self.enqueue(Action::SubmitNewTag);
                return Some(DetailPane::View);
            }
            _ => {
                let mut tag = self.directory.new_tag_input().to_string();
                if apply_text_input(&mut tag, key) {
                    self.update(|directory| directory.set_new_tag(tag));
                }
            }
        }
        None
    }

    fn handle_interaction_key(
        &mut self,
        form: &mut InteractionForm,
        key: KeyEvent,
    ) -> Option<DetailPane> {
        let mut draft = self.directory.new_interaction_draft().clone();
        match key.code {
            KeyCode::Esc => return Some(DetailPane::View),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if form.focus == 0 {
                    draft.date = Some(today_date_string());
                    self.update(|directory| directory.set_new_interaction(draft));
                    self.set_status("Date set to today");
                }
            }
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_save_focus() {
                    self.enqueue(Action::SubmitNewInteraction);
                } else if form.is_cancel_focus() {
                    return Some(DetailPane::View);
                } else {
                    form.focus_next();
                }
            }
            _ => {
                let changed = match form.focus {
                    0 => apply_optional_input(&mut draft.date, key),
                    1 => {
                        let changed = apply_text_input(&mut form.topics, key);
                        if changed {
                            draft.topics = Some(parse_topics(&form.topics));
                        }
                        changed
                    }
                    2 => apply_optional_input(&mut draft.medium, key),
                    _ => false,
                };
                if changed {
                    self.update(|directory| directory.set_new_interaction(draft));
                }
            }
        }
        None
    }

    fn move_selection(&mut self, delta: i32) {
        let len = self.directory.filtered_contacts().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let len = len as i32;
        let mut next = self.selected as i32 + delta;
        if next < 0 {
            next = 0;
        }
        if next >= len {
            next = len - 1;
        }
        self.selected = next as usize;
    }
}

fn apply_optional_input(target: &mut Option<String>, key: KeyEvent) -> bool {
    let mut value = target.clone().unwrap_or_default();
    if !apply_text_input(&mut value, key) {
        return false;
    }
    *target = if value.is_empty() { None } else { Some(value) };
    true
}

#[derive(Debug, Clone, Default)]
pub struct AddContactForm {
    pub(crate) focus: usize,
}

impl AddContactForm {
    const FIELD_COUNT: usize = 2;

    pub fn focus_next(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_save_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT
    }

    pub fn is_cancel_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT + 1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Details,
    Interactions,
}

impl DetailTab {
    pub const TITLES: [&'static str; 2] = ["Details", "Interactions"];

    pub fn index(self) -> usize {
        match self {
            DetailTab::Details => 0,
            DetailTab::Interactions => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            DetailTab::Details => DetailTab::Interactions,
            DetailTab::Interactions => DetailTab::Details,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub tab: DetailTab,
    pub pane: DetailPane,
    pub tag_cursor: usize,
}

#[derive(Debug, Clone, Default)]
pub enum DetailPane {
    #[default]
    View,
    Edit(EditForm),
    PhotoPath(PhotoPrompt),
    NewTag,
    NewInteraction(InteractionForm),
}

/// Focus over the edit form: the contact fields, then the photo picker,
/// then the Save and Cancel buttons.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub(crate) focus: usize,
}

impl EditForm {
    const FIELD_COUNT: usize = ContactField::ALL.len();
    const PHOTO: usize = Self::FIELD_COUNT;
    const SAVE: usize = Self::FIELD_COUNT + 1;
    const CANCEL: usize = Self::FIELD_COUNT + 2;
    const TOTAL: usize = Self::FIELD_COUNT + 3;

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::TOTAL;
    }

    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = Self::TOTAL - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.focus).copied()
    }

    pub fn is_photo_focus(&self) -> bool {
        self.focus == Self::PHOTO
    }

    pub fn is_save_focus(&self) -> bool {
        self.focus == Self::SAVE
    }

    pub fn is_cancel_focus(&self) -> bool {
        self.focus == Self::CANCEL
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhotoPrompt {
    pub path: String,
    pub(crate) form: EditForm,
}

/// The interaction form keeps the raw topics text so separators and spaces
/// survive while typing; the parsed list goes to the directory draft.
#[derive(Debug, Clone, Default)]
pub struct InteractionForm {
    pub(crate) focus: usize,
    pub topics: String,
}

impl InteractionForm {
    const FIELD_COUNT: usize = 3;

    pub fn from_draft(draft: &InteractionDraft) -> Self {
        Self {
            focus: 0,
            topics: draft
                .topics
                .as_deref()
                .map(join_topics)
                .unwrap_or_default(),
        }
    }

    pub fn focus_next(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_save_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT
    }

    pub fn is_cancel_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT + 1
    }
}
