// web_app/forms/quote.rs - Quote request form

use serde::{Deserialize, Serialize};

use super::submit::{MailDraft, MailForm};
use super::validation::{
    validate_email, validate_name, validate_phone, validate_quantity, validate_selection,
};
use crate::web_app::error::FieldError;
use crate::web_app::model::ProductCategory;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Option<ProductCategory>,
    /// Empty when not specified; reset whenever the category changes
    pub subcategory: String,
    /// Raw input; validated with `validate_quantity`
    pub quantity: String,
    pub custom_requirements: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Category,
    Subcategory,
    Quantity,
    CustomRequirements,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteFormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub category: Option<FieldError>,
    pub quantity: Option<FieldError>,
}

impl QuoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
    }

    pub fn get(&self, field: QuoteField) -> Option<&FieldError> {
        match field {
            QuoteField::Name => self.name.as_ref(),
            QuoteField::Email => self.email.as_ref(),
            QuoteField::Phone => self.phone.as_ref(),
            QuoteField::Category => self.category.as_ref(),
            QuoteField::Quantity => self.quantity.as_ref(),
            _ => None,
        }
    }

    pub fn clear(&mut self, field: QuoteField) {
        match field {
            QuoteField::Name => self.name = None,
            QuoteField::Email => self.email = None,
            QuoteField::Phone => self.phone = None,
            QuoteField::Category => self.category = None,
            QuoteField::Quantity => self.quantity = None,
            _ => {}
        }
    }
}

impl QuoteFormData {
    /// Current text of a field; `Category` yields the display name
    pub fn value(&self, field: QuoteField) -> String {
        match field {
            QuoteField::Name => self.name.clone(),
            QuoteField::Email => self.email.clone(),
            QuoteField::Phone => self.phone.clone(),
            QuoteField::Category => self.category.map(|c| c.name().to_string()).unwrap_or_default(),
            QuoteField::Subcategory => self.subcategory.clone(),
            QuoteField::Quantity => self.quantity.clone(),
            QuoteField::CustomRequirements => self.custom_requirements.clone(),
            QuoteField::Message => self.message.clone(),
        }
    }

    /// Set a text field; `Category` takes the display name or slug
    pub fn set(&mut self, field: QuoteField, value: String) {
        match field {
            QuoteField::Name => self.name = value,
            QuoteField::Email => self.email = value,
            QuoteField::Phone => self.phone = value,
            QuoteField::Category => self.set_category(ProductCategory::parse(&value)),
            QuoteField::Subcategory => self.subcategory = value,
            QuoteField::Quantity => self.quantity = value,
            QuoteField::CustomRequirements => self.custom_requirements = value,
            QuoteField::Message => self.message = value,
        }
    }

    pub fn set_category(&mut self, category: Option<ProductCategory>) {
        self.category = category;
        self.subcategory.clear();
    }

    pub fn validate(&self) -> Result<(), QuoteFormErrors> {
        let errors = QuoteFormErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            phone: validate_phone(&self.phone).err(),
            category: validate_selection(self.category, "product category").err(),
            quantity: validate_quantity(&self.quantity).err(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

impl MailForm for QuoteFormData {
    fn mail_draft(&self, recipient: &str) -> MailDraft {
        let category = self.category.map(|c| c.name()).unwrap_or_default();
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\n\
             Product Category: {}\nProduct Subcategory: {}\nQuantity: {}\n\n\
             Custom Requirements: {}\n\n\
             Additional Message: {}\n\n\
             ---\nThis quote request was submitted through the Aclon Sports website.",
            self.name,
            self.email,
            or_placeholder(&self.phone, "Not provided"),
            category,
            or_placeholder(&self.subcategory, "Not specified"),
            self.quantity,
            or_placeholder(&self.custom_requirements, "None specified"),
            or_placeholder(&self.message, "None"),
        );
        MailDraft {
            recipient: recipient.to_string(),
            subject: format!("Quote Request - {category}"),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> QuoteFormData {
        QuoteFormData {
            name: "Sam Lee".to_string(),
            email: "sam@club.org".to_string(),
            category: Some(ProductCategory::SportsUniforms),
            subcategory: "Soccer Kits".to_string(),
            quantity: "25".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_quote() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_category_change_resets_subcategory() {
        let mut form = valid();
        form.set(QuoteField::Category, "Gym Wear".to_string());
        assert_eq!(form.category, Some(ProductCategory::GymWear));
        assert!(form.subcategory.is_empty());
    }

    #[test]
    fn test_missing_category() {
        let form = QuoteFormData { category: None, ..valid() };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.category.map(|e| e.to_string()).as_deref(),
            Some("Please select a product category")
        );
    }

    #[test]
    fn test_mail_draft() {
        let draft = valid().mail_draft("quotes@aclonsports.com");
        assert_eq!(draft.subject, "Quote Request - Sports Uniforms");
        assert!(draft.body.starts_with("Name: Sam Lee\nEmail: sam@club.org\nPhone: Not provided\n\n"));
        assert!(draft.body.contains("Product Subcategory: Soccer Kits\nQuantity: 25"));
        assert!(draft.body.contains("Custom Requirements: None specified"));
        assert!(draft.body.ends_with("submitted through the Aclon Sports website."));
    }
}
