use std::sync::{Arc, Mutex};

use mockall::mock;

use person_pipeline::{
    FormattedPerson, PersonFormatter, PersonStore, PersonValidator, RawPerson, Result,
};

mock! {
    pub Validator {}

    impl PersonValidator for Validator {
        fn validate(&self, record: &RawPerson) -> Result<()>;
    }
}

mock! {
    pub Formatter {}

    impl PersonFormatter for Formatter {
        fn format(&self, record: &RawPerson) -> FormattedPerson;
    }
}

mock! {
    pub Store {}

    impl PersonStore for Store {
        fn save(&self, person: &FormattedPerson) -> Result<()>;
    }
}

/// Store that keeps every record it accepts, for asserting on what reached it
#[derive(Clone, Default)]
pub struct RecordingStore {
    saved: Arc<Mutex<Vec<FormattedPerson>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<FormattedPerson> {
        self.saved.lock().unwrap().clone()
    }
}

impl PersonStore for RecordingStore {
    fn save(&self, person: &FormattedPerson) -> Result<()> {
        person_pipeline::save(person)?;
        self.saved.lock().unwrap().push(person.clone());
        Ok(())
    }
}
