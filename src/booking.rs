//! Booking intake workflow: the state behind the booking modal.
//!
//! `BookingIntake` is a two-state machine (closed/open) owning the form
//! fields. All mutation goes through its operations; the page keeps one
//! instance in component state and the modal only renders a snapshot.
//! Submission is simulated: a valid form produces a `BookingRequest` for the
//! caller to log, the form resets and the modal closes. There is no I/O.

use serde::Serialize;

use crate::catalog::Service;

/// Offered when no service catalog is supplied to the modal.
pub const FALLBACK_SERVICES: &[&str] = &[
    "Plumbing Services",
    "Painting Services",
    "Waterproofing",
    "Carpentry Work",
    "Architectural Consultancy",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Address,
    Service,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// `name`, `phone` or `service` was left empty at submission time.
    MissingRequiredField,
}

impl BookingError {
    pub fn message(&self) -> &'static str {
        match self {
            BookingError::MissingRequiredField => "Please fill in all required fields.",
        }
    }
}

/// Snapshot of a valid submission, the payload a real deployment would
/// dispatch to a backend or CRM.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingIntake {
    open: bool,
    form: BookingForm,
}

impl BookingIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Opens the modal. A supplied preselection seeds the service field;
    /// `None` leaves the form exactly as it was. There is deliberately no
    /// reset on open, so input survives an accidental dismissal.
    pub fn open(&mut self, preselected: Option<&str>) {
        if let Some(service) = preselected {
            self.form.service = service.to_string();
        }
        self.open = true;
    }

    /// Mutates a single field. No validation happens on change.
    pub fn update_field(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::Name => self.form.name = value,
            BookingField::Email => self.form.email = value,
            BookingField::Phone => self.form.phone = value,
            BookingField::Address => self.form.address = value,
            BookingField::Service => self.form.service = value,
            BookingField::Message => self.form.message = value,
        }
    }

    /// Validates the required fields and, on success, returns the request
    /// snapshot, clears the form and closes the modal. On failure nothing
    /// changes and the modal stays open. Values are taken as typed: no
    /// trimming, whitespace counts as present.
    pub fn submit(&mut self) -> Result<BookingRequest, BookingError> {
        if self.form.name.is_empty() || self.form.phone.is_empty() || self.form.service.is_empty() {
            return Err(BookingError::MissingRequiredField);
        }

        let form = std::mem::take(&mut self.form);
        self.open = false;
        Ok(BookingRequest {
            name: form.name,
            email: form.email,
            phone: form.phone,
            address: form.address,
            service: form.service,
            message: form.message,
        })
    }

    /// Closes the modal, keeping whatever the user typed.
    pub fn cancel(&mut self) {
        self.open = false;
    }
}

/// Titles offered in the service dropdown: the supplied catalog's titles when
/// it is non-empty, otherwise the fixed fallback list.
pub fn service_options(catalog: &[Service]) -> Vec<&'static str> {
    if catalog.is_empty() {
        FALLBACK_SERVICES.to_vec()
    } else {
        catalog.iter().map(|service| service.title).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SERVICES;

    #[test]
    fn starts_closed_and_empty() {
        let intake = BookingIntake::new();
        assert!(!intake.is_open());
        assert_eq!(*intake.form(), BookingForm::default());
    }

    #[test]
    fn open_with_preselection_seeds_the_service() {
        let mut intake = BookingIntake::new();
        intake.open(Some("Carpentry Work"));
        assert!(intake.is_open());
        assert_eq!(intake.form().service, "Carpentry Work");
    }

    #[test]
    fn open_without_preselection_touches_nothing() {
        let mut intake = BookingIntake::new();
        intake.update_field(BookingField::Service, "Painting Services".into());
        intake.open(None);
        assert_eq!(intake.form().service, "Painting Services");
    }

    #[test]
    fn update_field_mutates_exactly_one_field() {
        let mut intake = BookingIntake::new();
        intake.update_field(BookingField::Phone, "9876543210".into());
        assert_eq!(intake.form().phone, "9876543210");
        assert!(intake.form().name.is_empty());
        assert!(intake.form().email.is_empty());
        assert!(intake.form().address.is_empty());
        assert!(intake.form().service.is_empty());
        assert!(intake.form().message.is_empty());
    }

    #[test]
    fn submit_rejects_a_missing_name() {
        let mut intake = BookingIntake::new();
        intake.open(Some("Plumbing Services"));
        intake.update_field(BookingField::Phone, "9999999999".into());

        let before = intake.form().clone();
        assert_eq!(intake.submit(), Err(BookingError::MissingRequiredField));
        // Nothing changed: modal still open, form intact.
        assert!(intake.is_open());
        assert_eq!(*intake.form(), before);
    }

    #[test]
    fn submit_with_required_fields_resets_and_closes() {
        let mut intake = BookingIntake::new();
        intake.open(None);
        intake.update_field(BookingField::Name, "Asha Rao".into());
        intake.update_field(BookingField::Phone, "9876543210".into());
        intake.update_field(BookingField::Service, "Painting Services".into());

        let request = intake.submit().expect("valid form must submit");
        assert_eq!(request.name, "Asha Rao");
        assert_eq!(request.phone, "9876543210");
        assert_eq!(request.service, "Painting Services");
        assert!(request.email.is_empty());

        assert!(!intake.is_open());
        assert_eq!(*intake.form(), BookingForm::default());
    }

    #[test]
    fn whitespace_only_values_count_as_present() {
        // Values are taken as typed; a space passes the required check.
        let mut intake = BookingIntake::new();
        intake.update_field(BookingField::Name, " ".into());
        intake.update_field(BookingField::Phone, "9876543210".into());
        intake.update_field(BookingField::Service, "Waterproofing".into());
        assert!(intake.submit().is_ok());
    }

    #[test]
    fn cancel_closes_without_clearing_input() {
        let mut intake = BookingIntake::new();
        intake.open(None);
        intake.update_field(BookingField::Name, "X".into());
        intake.cancel();
        assert!(!intake.is_open());

        // Reopening without a preselection shows the kept input.
        intake.open(None);
        assert_eq!(intake.form().name, "X");
    }

    #[test]
    fn request_payload_serializes_for_the_simulated_dispatch() {
        let mut intake = BookingIntake::new();
        intake.update_field(BookingField::Name, "Asha Rao".into());
        intake.update_field(BookingField::Phone, "9876543210".into());
        intake.update_field(BookingField::Service, "Painting Services".into());
        let request = intake.submit().expect("valid form must submit");

        let payload = serde_json::to_string(&request).expect("payload serializes");
        assert!(payload.contains("\"service\":\"Painting Services\""));
    }

    #[test]
    fn service_options_prefer_the_supplied_catalog() {
        let titles = service_options(SERVICES);
        assert_eq!(
            titles,
            SERVICES.iter().map(|s| s.title).collect::<Vec<_>>()
        );
    }

    #[test]
    fn service_options_fall_back_when_the_catalog_is_empty() {
        assert_eq!(service_options(&[]), FALLBACK_SERVICES);
    }
}
