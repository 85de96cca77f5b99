// web_app/model/forms.rs - Add-record form logic
//
// The form components keep one text signal per field. On submit they build a
// draft from those signals and hand it to `submit_draft`, which validates,
// calls the caller's async submission function and reports what the form
// should do next.

use std::future::Future;

use crate::web_app::error::{ApiError, FormError};
use crate::web_app::model::{NewCar, NewClient};

/// Raw text of an add-record form, before validation
pub trait Draft {
    /// Payload sent to the service once the draft is valid
    type Payload;

    /// Record name used in the "Failed to add ..." message
    const NOUN: &'static str;

    /// Presence check then numeric coercion
    fn parse(&self) -> Result<Self::Payload, FormError>;
}

/// Field values of the Add Client form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub age: String,
}

impl Draft for ClientDraft {
    type Payload = NewClient;
    const NOUN: &'static str = "client";

    fn parse(&self) -> Result<NewClient, FormError> {
        if self.name.is_empty() || self.age.is_empty() {
            return Err(FormError::MissingFields);
        }

        Ok(NewClient {
            name: self.name.clone(),
            age: parse_number(&self.age, "Age")?,
        })
    }
}

/// Field values of the Add Car form; `client_id` is the selected option value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub matricule: String,
    pub client_id: String,
}

impl Draft for CarDraft {
    type Payload = NewCar;
    const NOUN: &'static str = "car";

    fn parse(&self) -> Result<NewCar, FormError> {
        if self.brand.is_empty()
            || self.model.is_empty()
            || self.matricule.is_empty()
            || self.client_id.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        Ok(NewCar {
            brand: self.brand.clone(),
            model: self.model.clone(),
            matricule: self.matricule.clone(),
            client_id: parse_number(&self.client_id, "Owner")?,
        })
    }
}

fn parse_number<N: std::str::FromStr>(raw: &str, field: &'static str) -> Result<N, FormError> {
    raw.trim()
        .parse::<N>()
        .map_err(|_| FormError::InvalidNumber { field })
}

/// What the form does after a submission attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// The record was created; the form invokes its close callback
    Submitted,
    /// The form stays open, values intact, showing this error
    Rejected(FormError),
}

/// Validate `draft` and, only when it is valid, run `submit` with its payload.
pub async fn submit_draft<D, F, Fut>(draft: &D, submit: F) -> FormOutcome
where
    D: Draft,
    F: FnOnce(D::Payload) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let payload = match draft.parse() {
        Ok(payload) => payload,
        Err(e) => return FormOutcome::Rejected(e),
    };

    match submit(payload).await {
        Ok(()) => FormOutcome::Submitted,
        Err(e) => {
            tracing::error!("Error adding {}: {}", D::NOUN, e);
            FormOutcome::Rejected(FormError::SubmitFailed { noun: D::NOUN })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_draft_parses_age() {
        let draft = ClientDraft {
            name: "Ana".to_string(),
            age: " 30 ".to_string(),
        };
        assert_eq!(
            draft.parse(),
            Ok(NewClient { name: "Ana".to_string(), age: 30 })
        );
    }

    #[test]
    fn test_client_draft_requires_every_field() {
        let draft = ClientDraft { name: String::new(), age: "30".to_string() };
        assert_eq!(draft.parse(), Err(FormError::MissingFields));

        let draft = ClientDraft { name: "Ana".to_string(), age: String::new() };
        assert_eq!(draft.parse(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_non_numeric_owner_is_rejected() {
        let draft = CarDraft {
            brand: "Kia".to_string(),
            model: "Rio".to_string(),
            matricule: "99-AB".to_string(),
            client_id: "abc".to_string(),
        };
        assert_eq!(draft.parse(), Err(FormError::InvalidNumber { field: "Owner" }));
    }

    #[test]
    fn test_car_draft_payload() {
        let draft = CarDraft {
            brand: "Kia".to_string(),
            model: "Rio".to_string(),
            matricule: "99-AB".to_string(),
            client_id: "4".to_string(),
        };
        let payload = draft.parse().unwrap();
        assert_eq!(payload.client_id, 4);
        assert_eq!(payload.matricule, "99-AB");
    }
}
