//! Edit-dialog session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog edits a string draft seeded from a copy of one record. The
//! element table is only touched when the caller applies the returned
//! `EditOutcome`, so nothing typed into the form leaks into the table before
//! Save. Each open session ends exactly once: confirm or cancel take the
//! session out, and any later terminal call reports `NotOpen`.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::state::elements::PeriodicElement;

/// Errors produced by the edit flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Confirm, cancel, or a field edit arrived with no dialog open.
    #[error("no edit dialog is open")]
    NotOpen,

    #[error("name must not be empty")]
    EmptyName,

    #[error("symbol must not be empty")]
    EmptySymbol,

    /// Weight did not parse as a finite number greater than zero.
    #[error("weight must be a positive number, got {raw:?}")]
    InvalidWeight { raw: String },
}

/// Editable form fields. Position is shown but read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Weight,
    Symbol,
}

/// Form contents while the dialog is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDraft {
    pub position: u32,
    pub name: String,
    pub weight: String,
    pub symbol: String,
}

impl ElementDraft {
    pub fn from_element(element: &PeriodicElement) -> Self {
        Self {
            position: element.position,
            name: element.name.clone(),
            weight: element.weight_text(),
            symbol: element.symbol.clone(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Weight => &self.weight,
            DraftField::Symbol => &self.symbol,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Weight => self.weight = value,
            DraftField::Symbol => self.symbol = value,
        }
    }

    /// Build the record this draft describes.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: empty name, empty symbol, then an
    /// unparseable or non-positive weight.
    pub fn validate(&self) -> Result<PeriodicElement, EditError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EditError::EmptyName);
        }
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(EditError::EmptySymbol);
        }
        let weight = parse_weight(&self.weight)?;
        Ok(PeriodicElement::new(self.position, name, weight, symbol))
    }
}

fn parse_weight(raw: &str) -> Result<f64, EditError> {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
        _ => Err(EditError::InvalidWeight { raw: raw.to_owned() }),
    }
}

/// One open instance of the dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    /// Increments on every open, so a reopened dialog is a new instance.
    pub instance: u64,
    /// Copy of the record as it was when the dialog opened.
    pub seed: PeriodicElement,
    pub draft: ElementDraft,
}

/// How an edit session ended.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome {
    Confirmed(PeriodicElement),
    Cancelled,
}

/// Dialog lifecycle: closed, or open with one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditState {
    session: Option<EditSession>,
    last_instance: u64,
    error: Option<EditError>,
}

impl EditState {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Validation error from the last rejected confirm, if any.
    pub fn error(&self) -> Option<&EditError> {
        self.error.as_ref()
    }

    /// Open a fresh session seeded with a copy of `element`.
    ///
    /// An already-open session is discarded without an outcome.
    pub fn open(&mut self, element: &PeriodicElement) -> u64 {
        self.last_instance += 1;
        self.error = None;
        self.session = Some(EditSession {
            instance: self.last_instance,
            seed: element.clone(),
            draft: ElementDraft::from_element(element),
        });
        log::debug!("edit dialog {} opened for position {}", self.last_instance, element.position);
        self.last_instance
    }

    /// Update one draft field.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotOpen`] when no session is open.
    pub fn set_field(&mut self, field: DraftField, value: String) -> Result<(), EditError> {
        let session = self.session.as_mut().ok_or(EditError::NotOpen)?;
        session.draft.set(field, value);
        self.error = None;
        Ok(())
    }

    /// Validate the draft and close with the edited record.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotOpen`] when no session is open. Validation
    /// errors leave the session open and are also kept for display.
    pub fn confirm(&mut self) -> Result<EditOutcome, EditError> {
        let session = self.session.as_ref().ok_or(EditError::NotOpen)?;
        match session.draft.validate() {
            Ok(record) => {
                log::debug!("edit dialog {} confirmed", session.instance);
                self.session = None;
                self.error = None;
                Ok(EditOutcome::Confirmed(record))
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Close without a result.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotOpen`] when no session is open.
    pub fn cancel(&mut self) -> Result<EditOutcome, EditError> {
        let session = self.session.take().ok_or(EditError::NotOpen)?;
        log::debug!("edit dialog {} cancelled", session.instance);
        self.error = None;
        Ok(EditOutcome::Cancelled)
    }
}
