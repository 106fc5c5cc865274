//! Form Models
//!
//! Data structures for the occurrence form and the mutation operations the
//! UI goes through. Everything here is plain in-memory state; the reactive
//! wrapper lives in `store.rs`.

use crate::ranks::RANKS;

/// The four fixed crew roles, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lead,
    Driver,
    Third,
    Fourth,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Lead, Role::Driver, Role::Third, Role::Fourth];

    /// Form label for the role's row
    pub fn label(self) -> &'static str {
        match self {
            Role::Lead => "Encarregado",
            Role::Driver => "Motorista",
            Role::Third => "3º Homem",
            Role::Fourth => "4º Homem",
        }
    }
}

/// One crew slot: a rank label from the vocabulary plus a free-text name
#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub rank: String,
    pub name: String,
}

impl CrewMember {
    fn with_rank(rank: &str) -> Self {
        Self {
            rank: rank.to_string(),
            name: String::new(),
        }
    }
}

/// One free-text support action
#[derive(Debug, Clone, PartialEq)]
pub struct SupportEntry {
    pub id: u32,
    pub text: String,
}

/// One seized-material row
#[derive(Debug, Clone, PartialEq)]
pub struct SeizedItem {
    pub id: u32,
    pub quantity: String,
    pub description: String,
}

/// Which sub-field of a seized item an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeizedField {
    Quantity,
    Description,
}

/// Full form state
///
/// Scalar fields are written directly; the two dynamic collections are only
/// touched through the add/update/remove operations so insertion order and
/// id uniqueness hold. Ids come from one counter shared by both collections
/// and are never reused within a session, including across `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub number: String,
    pub date: String,
    pub time: String,
    pub prefix: String,
    pub lead: CrewMember,
    pub driver: CrewMember,
    pub third: CrewMember,
    pub fourth: CrewMember,
    pub supervisor: String,
    pub location: String,
    pub duty_officer: String,
    pub nature: String,
    pub presentation: String,
    pub description: String,
    pub support: Vec<SupportEntry>,
    pub seized: Vec<SeizedItem>,
    next_id: u32,
}

/// Current date in the dd/mm/yyyy form the report uses
fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

impl FormState {
    /// Fresh form: today's date pre-filled, lead officer defaults to the
    /// second rank, the other roles to the first
    pub fn new() -> Self {
        Self {
            number: String::new(),
            date: today(),
            time: String::new(),
            prefix: String::new(),
            lead: CrewMember::with_rank(RANKS[1]),
            driver: CrewMember::with_rank(RANKS[0]),
            third: CrewMember::with_rank(RANKS[0]),
            fourth: CrewMember::with_rank(RANKS[0]),
            supervisor: String::new(),
            location: String::new(),
            duty_officer: String::new(),
            nature: String::new(),
            presentation: String::new(),
            description: String::new(),
            support: Vec::new(),
            seized: Vec::new(),
            next_id: 1,
        }
    }

    pub fn crew(&self, role: Role) -> &CrewMember {
        match role {
            Role::Lead => &self.lead,
            Role::Driver => &self.driver,
            Role::Third => &self.third,
            Role::Fourth => &self.fourth,
        }
    }

    pub fn crew_mut(&mut self, role: Role) -> &mut CrewMember {
        match role {
            Role::Lead => &mut self.lead,
            Role::Driver => &mut self.driver,
            Role::Third => &mut self.third,
            Role::Fourth => &mut self.fourth,
        }
    }

    fn mint_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a blank support entry with a fresh id
    pub fn add_support_entry(&mut self) {
        let id = self.mint_id();
        self.support.push(SupportEntry {
            id,
            text: String::new(),
        });
    }

    /// Remove by id; absent ids are a no-op
    pub fn remove_support_entry(&mut self, id: u32) {
        self.support.retain(|entry| entry.id != id);
    }

    pub fn update_support_entry(&mut self, id: u32, text: String) {
        if let Some(entry) = self.support.iter_mut().find(|entry| entry.id == id) {
            entry.text = text;
        }
    }

    /// Append a blank seized item with a fresh id
    pub fn add_seized_item(&mut self) {
        let id = self.mint_id();
        self.seized.push(SeizedItem {
            id,
            quantity: String::new(),
            description: String::new(),
        });
    }

    /// Remove by id; absent ids are a no-op
    pub fn remove_seized_item(&mut self, id: u32) {
        self.seized.retain(|item| item.id != id);
    }

    pub fn update_seized_item(&mut self, id: u32, field: SeizedField, value: String) {
        if let Some(item) = self.seized.iter_mut().find(|item| item.id == id) {
            match field {
                SeizedField::Quantity => item.quantity = value,
                SeizedField::Description => item.description = value,
            }
        }
    }

    /// Restore the initial defaults and empty both collections.
    ///
    /// The id counter survives so ids stay unique for the whole session.
    pub fn reset(&mut self) {
        let next_id = self.next_id;
        *self = FormState::new();
        self.next_id = next_id;
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_defaults() {
        let form = FormState::new();
        assert!(form.number.is_empty());
        assert!(chrono::NaiveDate::parse_from_str(&form.date, "%d/%m/%Y").is_ok());
        assert_eq!(form.lead.rank, RANKS[1]);
        assert_eq!(form.driver.rank, RANKS[0]);
        assert_eq!(form.third.rank, RANKS[0]);
        assert_eq!(form.fourth.rank, RANKS[0]);
        assert!(form.support.is_empty());
        assert!(form.seized.is_empty());
    }

    #[test]
    fn test_ids_increase_across_both_collections() {
        let mut form = FormState::new();
        form.add_support_entry();
        form.add_seized_item();
        form.add_support_entry();
        assert_eq!(form.support[0].id, 1);
        assert_eq!(form.seized[0].id, 2);
        assert_eq!(form.support[1].id, 3);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut form = FormState::new();
        form.add_support_entry();
        form.add_support_entry();
        form.add_support_entry();
        form.update_support_entry(1, "a".to_string());
        form.update_support_entry(2, "b".to_string());
        form.update_support_entry(3, "c".to_string());

        form.remove_support_entry(2);

        let texts: Vec<&str> = form.support.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut form = FormState::new();
        form.add_support_entry();
        form.add_seized_item();
        let before = form.clone();

        form.remove_support_entry(99);
        form.remove_seized_item(99);

        assert_eq!(form, before);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut form = FormState::new();
        form.add_seized_item();
        let before = form.clone();

        form.update_seized_item(42, SeizedField::Quantity, "3".to_string());
        form.update_support_entry(42, "x".to_string());

        assert_eq!(form, before);
    }

    #[test]
    fn test_update_seized_fields() {
        let mut form = FormState::new();
        form.add_seized_item();
        let id = form.seized[0].id;

        form.update_seized_item(id, SeizedField::Quantity, "2".to_string());
        form.update_seized_item(id, SeizedField::Description, "celulares".to_string());

        assert_eq!(form.seized[0].quantity, "2");
        assert_eq!(form.seized[0].description, "celulares");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::new();
        form.number = "1234".to_string();
        form.lead.name = "Silva".to_string();
        form.add_support_entry();
        form.add_seized_item();

        form.reset();

        let mut fresh = FormState::new();
        fresh.date.clone_from(&form.date);
        fresh.next_id = form.next_id;
        assert_eq!(form, fresh);
        assert!(form.support.is_empty());
        assert!(form.seized.is_empty());
    }

    #[test]
    fn test_reset_does_not_reuse_ids() {
        let mut form = FormState::new();
        form.add_support_entry();
        form.add_support_entry();
        form.reset();

        form.add_seized_item();
        assert_eq!(form.seized[0].id, 3);
    }

    #[test]
    fn test_crew_accessors() {
        let mut form = FormState::new();
        form.crew_mut(Role::Third).name = "Souza".to_string();
        assert_eq!(form.crew(Role::Third).name, "Souza");
        assert_eq!(form.third.name, "Souza");
    }
}
