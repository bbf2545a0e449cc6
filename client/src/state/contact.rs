//! Contact form model.
//!
//! DESIGN
//! ======
//! The form is intentionally not wired to a backend: a submission is counted
//! and answered with a placeholder acknowledgement, and nothing leaves the
//! browser. Required-field checks are left to the browser's native
//! constraint validation, which blocks the `submit` event until they pass.

use serde::Serialize;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const ACKNOWLEDGEMENT: &str = "Thanks! This is a demo form \u{2014} wire it to your backend.";

/// Who is getting in touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Role {
    Student,
    Parent,
    Teacher,
    #[serde(rename = "School Administrator")]
    SchoolAdministrator,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Student, Role::Parent, Role::Teacher, Role::SchoolAdministrator, Role::Other];

    /// `<option value>`; identical to the label.
    pub fn value(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Teacher => "Teacher",
            Role::SchoolAdministrator => "School Administrator",
            Role::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        self.value()
    }

    /// Parse a `<select>` value; the empty placeholder option yields `None`.
    pub fn from_value(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.value() == value)
    }
}

/// Free-text inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Email,
    Message,
}

impl ContactField {
    /// Single-line inputs in grid order; `Message` renders as a textarea.
    pub const INPUTS: [ContactField; 4] =
        [ContactField::FirstName, ContactField::LastName, ContactField::Phone, ContactField::Email];

    pub fn id(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First name*",
            ContactField::LastName => "Last name*",
            ContactField::Phone => "Phone*",
            ContactField::Email => "Email*",
            ContactField::Message => "Enquiry",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Phone => "tel",
            ContactField::Email => "email",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::FirstName => "Jane",
            ContactField::LastName => "Doe",
            ContactField::Phone => "+61 400 000 000",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Tell us a bit about what you\u{2019}re looking for\u{2026}",
        }
    }

    pub fn required(self) -> bool {
        self != ContactField::Message
    }
}

/// Current values of the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub role: Option<Role>,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submissions: u32,
}

impl ContactState {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.form.first_name,
            ContactField::LastName => &mut self.form.last_name,
            ContactField::Phone => &mut self.form.phone,
            ContactField::Email => &mut self.form.email,
            ContactField::Message => &mut self.form.message,
        };
        *slot = value;
    }

    pub fn set_role(&mut self, value: &str) {
        self.form.role = Role::from_value(value);
    }

    /// Record one submission and return the acknowledgement to show for it.
    ///
    /// Form values are kept so the visitor does not lose what they typed.
    pub fn submit(&mut self) -> &'static str {
        self.submissions = self.submissions.saturating_add(1);
        ACKNOWLEDGEMENT
    }
}
