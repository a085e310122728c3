//! Order domain types shared by the form session and the API client

use super::forms::{FormValues, PizzaSize};
use serde::{Deserialize, Serialize};

/// Payload posted to the order service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: String,
    pub size: PizzaSize,
    pub toppings: Vec<String>,
}

impl OrderRequest {
    /// Build the payload from form values.
    ///
    /// Returns `None` when the size is not one of the known codes, which can
    /// only happen for a form that does not validate.
    pub fn from_values(values: &FormValues) -> Option<Self> {
        Some(Self {
            customer: values.full_name.clone(),
            size: PizzaSize::from_code(&values.size)?,
            toppings: values.toppings.iter().cloned().collect(),
        })
    }
}

/// Result of a submission, each carrying the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failure(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_values_maps_fields() {
        let mut values = FormValues {
            full_name: "Cherry".to_string(),
            size: "M".to_string(),
            ..Default::default()
        };
        values.toggle_topping("4");
        values.toggle_topping("1");

        let request = OrderRequest::from_values(&values).unwrap();
        assert_eq!(
            request,
            OrderRequest {
                customer: "Cherry".to_string(),
                size: PizzaSize::Medium,
                toppings: vec!["1".to_string(), "4".to_string()],
            }
        );
    }

    #[test]
    fn test_from_values_without_size_is_none() {
        let values = FormValues {
            full_name: "Cherry".to_string(),
            ..Default::default()
        };
        assert!(OrderRequest::from_values(&values).is_none());
    }

    #[test]
    fn test_request_json_shape() {
        let request = OrderRequest {
            customer: "Cherry".to_string(),
            size: PizzaSize::Medium,
            toppings: vec![],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"customer": "Cherry", "size": "M", "toppings": []})
        );
    }

    #[test]
    fn test_outcome_message() {
        let ok = SubmissionOutcome::Success("Order received".to_string());
        let err = SubmissionOutcome::Failure("Size is required".to_string());
        assert!(ok.is_success());
        assert!(!err.is_success());
        assert_eq!(ok.message(), "Order received");
        assert_eq!(err.message(), "Size is required");
    }
}
