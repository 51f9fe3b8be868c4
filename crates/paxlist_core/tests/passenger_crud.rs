use paxlist_core::{
    FormError, FormState, PassengerService, PresetAnswer, SaveOutcome, CLEAR_CONFIRM_MESSAGE,
    SUBMIT_LABEL_ADD, SUBMIT_LABEL_UPDATE,
};
use std::cell::Cell;
use std::collections::HashSet;

const ANA_CPF: &str = "52998224725";
const BRUNO_CPF: &str = "11144477735";
const CARLA_CPF: &str = "12345678909";

fn seeded_service() -> PassengerService {
    let mut service = PassengerService::in_memory();
    service.save("Ana", ANA_CPF).unwrap();
    service.save("Bruno", BRUNO_CPF).unwrap();
    service.save("Carla", CARLA_CPF).unwrap();
    service
}

fn names(service: &PassengerService) -> Vec<&str> {
    service
        .records()
        .iter()
        .map(|record| record.name.as_str())
        .collect()
}

#[test]
fn save_with_blank_name_leaves_store_unchanged() {
    let mut service = seeded_service();
    let before = service.records().to_vec();

    for name in ["", "   ", "\t"] {
        let err = service.save(name, ANA_CPF).unwrap_err();
        assert_eq!(err, FormError::MissingInput);
        assert_eq!(err.notice(), "Fill in name and CPF");
    }
    assert_eq!(service.records(), before.as_slice());
}

#[test]
fn save_with_blank_identifier_is_missing_input() {
    let mut service = PassengerService::in_memory();
    let err = service.save("Ana", "  ").unwrap_err();
    assert_eq!(err, FormError::MissingInput);
    assert!(service.records().is_empty());
}

#[test]
fn save_with_invalid_identifier_is_rejected() {
    let mut service = PassengerService::in_memory();
    let err = service.save("Ana", "11111111111").unwrap_err();
    assert!(matches!(err, FormError::InvalidIdentifier(_)));
    assert!(service.records().is_empty());
}

#[test]
fn save_new_record_appends_with_unique_id_and_resets_inputs() {
    let mut service = seeded_service();
    let outcome = service.save("Diego", "529.982.247-25").unwrap();

    assert!(matches!(outcome, SaveOutcome::Created(_)));
    assert_eq!(service.records().len(), 4);
    assert_eq!(service.records().last().unwrap().id, outcome.id());

    let ids = service
        .records()
        .iter()
        .map(|record| record.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 4);
    assert_eq!(service.form(), &FormState::default());
}

#[test]
fn edit_updates_in_place_and_keeps_id_and_position() {
    let mut service = seeded_service();
    let target = service.records()[1].clone();

    assert!(service.begin_edit(target.id));
    assert_eq!(service.form().name_input, "Bruno");
    assert_eq!(service.form().identifier_input, BRUNO_CPF);
    assert_eq!(service.submit_label(), SUBMIT_LABEL_UPDATE);
    assert_eq!(service.records().len(), 3);

    service.set_name_input("Bruno Lima");
    let outcome = service.save_form().unwrap();

    assert_eq!(outcome, SaveOutcome::Updated(target.id));
    assert_eq!(service.records().len(), 3);
    assert_eq!(names(&service), vec!["Ana", "Bruno Lima", "Carla"]);
    assert_eq!(service.records()[1].id, target.id);
    assert!(!service.is_editing());
    assert_eq!(service.submit_label(), SUBMIT_LABEL_ADD);
}

#[test]
fn failed_edit_keeps_edit_mode() {
    let mut service = seeded_service();
    let id = service.records()[0].id;
    service.begin_edit(id);

    service.set_identifier_input("52998224700");
    assert!(service.save_form().is_err());
    assert_eq!(service.form().editing_id, Some(id));
    assert_eq!(service.records()[0].identifier, ANA_CPF);
}

#[test]
fn begin_edit_unknown_id_changes_nothing() {
    let mut service = seeded_service();
    assert!(!service.begin_edit(999));
    assert_eq!(service.form(), &FormState::default());
}

#[test]
fn cancel_edit_returns_to_create_mode() {
    let mut service = seeded_service();
    service.begin_edit(service.records()[2].id);
    service.cancel_edit();

    assert_eq!(service.form(), &FormState::default());
    assert_eq!(service.records().len(), 3);
}

#[test]
fn removing_unknown_id_is_a_noop() {
    let mut service = seeded_service();
    let before = service.records().to_vec();

    assert!(!service.remove(999));
    assert_eq!(service.records(), before.as_slice());
}

#[test]
fn remove_keeps_order_of_remaining_records() {
    let mut service = seeded_service();
    let id = service.records()[1].id;

    assert!(service.remove(id));
    assert_eq!(names(&service), vec!["Ana", "Carla"]);
}

#[test]
fn removing_edited_record_leaves_edit_mode() {
    let mut service = seeded_service();
    let id = service.records()[0].id;
    service.begin_edit(id);

    assert!(service.remove(id));
    assert!(!service.is_editing());
    assert_eq!(service.form().name_input, "Ana");

    let outcome = service.save_form().unwrap();
    assert!(matches!(outcome, SaveOutcome::Created(new_id) if new_id != id));
    assert_eq!(names(&service), vec!["Bruno", "Carla", "Ana"]);
}

#[test]
fn clear_without_confirmation_keeps_list() {
    let mut service = seeded_service();
    let asked = Cell::new(false);
    let prompt = |message: &str| {
        assert_eq!(message, CLEAR_CONFIRM_MESSAGE);
        asked.set(true);
        false
    };

    assert!(!service.clear(&prompt));
    assert!(asked.get());
    assert_eq!(service.records().len(), 3);
}

#[test]
fn clear_with_confirmation_empties_list_and_edit_mode() {
    let mut service = seeded_service();
    service.begin_edit(service.records()[0].id);

    assert!(service.clear(&PresetAnswer(true)));
    assert!(service.records().is_empty());
    assert!(!service.is_editing());

    let outcome = service.save("Ana", ANA_CPF).unwrap();
    assert_eq!(outcome, SaveOutcome::Created(4));
}
