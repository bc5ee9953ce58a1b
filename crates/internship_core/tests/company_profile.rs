use chrono::{TimeZone, Utc};
use internship_core::{
    AppContext, CompanyView, CoreConfig, FixedClock, FormSubmission, KeyValueStore, MemoryStore,
    StorageKey,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 21, 10, 15, 0).unwrap())
}

fn company_form() -> FormSubmission {
    FormSubmission::new()
        .with("name", "  Acme Robotics ")
        .with("mentor", "Priya Shah")
        .with("email", "priya@acme.test")
        .with("phone", "")
        .with("address", "12 Harbor Way")
}

#[test]
fn empty_store_renders_placeholder_without_prefill() {
    let store = MemoryStore::new();
    let clock = clock();
    let view = AppContext::new(&store, &clock, CoreConfig::default())
        .company()
        .render()
        .unwrap();
    assert_eq!(
        view,
        CompanyView {
            preview: "No data saved yet.".to_string(),
            form: None,
        }
    );
}

#[test]
fn save_overwrites_with_trimmed_values_and_keeps_empty_fields() {
    let store = MemoryStore::new();
    let clock = clock();
    let company = AppContext::new(&store, &clock, CoreConfig::default()).company();

    company
        .save(&FormSubmission::new().with("name", "Old Co"))
        .unwrap();
    let saved = company.save(&company_form()).unwrap();
    assert_eq!(saved.name, "Acme Robotics");
    assert_eq!(saved.updated_at, "2026-10-21T10:15:00.000Z");

    let raw = store.get(StorageKey::CompanyProfile.as_str()).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["phone"], "");
    assert_eq!(stored["name"], "Acme Robotics");

    let view = company.render().unwrap();
    assert_eq!(
        view.preview,
        concat!(
            "Company: Acme Robotics\nMentor: Priya Shah\nEmail: priya@acme.test\n",
            "Phone: \nAddress: 12 Harbor Way"
        )
    );
    assert!(!view.preview.contains("undefined"));
    assert_eq!(view.form.unwrap().value("mentor"), "Priya Shah");
}

#[test]
fn missing_stored_fields_render_blank() {
    let store = MemoryStore::new();
    store
        .set(StorageKey::CompanyProfile.as_str(), r#"{"name":"Partial Inc"}"#)
        .unwrap();
    let clock = clock();
    let view = AppContext::new(&store, &clock, CoreConfig::default())
        .company()
        .render()
        .unwrap();
    assert!(view.preview.starts_with("Company: Partial Inc\nMentor: \n"));
}

#[test]
fn clear_removes_profile_without_confirmation() {
    let store = MemoryStore::new();
    let clock = clock();
    let company = AppContext::new(&store, &clock, CoreConfig::default()).company();
    company.save(&company_form()).unwrap();

    company.clear().unwrap();
    assert_eq!(store.get(StorageKey::CompanyProfile.as_str()).unwrap(), None);
    assert!(company.profile().unwrap().is_none());
    assert_eq!(company.render().unwrap().preview, "No data saved yet.");
}
