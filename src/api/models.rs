use serde_json::Value;

use super::error::ApiError;

// List values repeat their key; absent optionals are never pushed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_all<I, T>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    pub fn extend(&mut self, other: Params) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub line_1: String,
    pub line_2: String,
    pub line_3: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

impl Address {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("address-line-1", &self.line_1)
            .push("address-line-2", &self.line_2)
            .push("address-line-3", &self.line_3)
            .push("city", &self.city)
            .push("state", &self.state)
            .push("country", &self.country)
            .push("zipcode", &self.zipcode);
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Ipv4,
    Ipv6,
    Cname,
}

impl RecordKind {
    /// Maps the user-facing record type (`A`, `AAAA`, `CNAME`) to its kind.
    pub fn from_record_type(record_type: &str) -> Option<Self> {
        match record_type {
            "A" => Some(Self::Ipv4),
            "AAAA" => Some(Self::Ipv6),
            "CNAME" => Some(Self::Cname),
            _ => None,
        }
    }

    /// Path segment used by `dns/manage/{add,delete}-<segment>-record`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Cname => "cname",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceOption {
    NoInvoice,
    PayInvoice,
    KeepInvoice,
}

impl InvoiceOption {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoInvoice => "NoInvoice",
            Self::PayInvoice => "PayInvoice",
            Self::KeepInvoice => "KeepInvoice",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DomainRegistration {
    pub domain: String,
    pub years: u32,
    pub ns: Vec<String>,
    pub customer_id: u64,
    pub reg_contact_id: u64,
    pub admin_contact_id: u64,
    pub tech_contact_id: u64,
    pub billing_contact_id: u64,
    pub invoice_option: InvoiceOption,
    pub purchase_privacy: Option<bool>,
    pub protect_privacy: Option<bool>,
}

impl DomainRegistration {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("domain-name", &self.domain)
            .push("years", self.years)
            .push_all("ns", &self.ns)
            .push("customer-id", self.customer_id)
            .push("reg-contact-id", self.reg_contact_id)
            .push("admin-contact-id", self.admin_contact_id)
            .push("tech-contact-id", self.tech_contact_id)
            .push("billing-contact-id", self.billing_contact_id)
            .push("invoice-option", self.invoice_option.as_str())
            .push_opt("purchase-privacy", self.purchase_privacy)
            .push_opt("protect-privacy", self.protect_privacy);
        params
    }
}

#[derive(Debug, Clone)]
pub struct NewContact {
    /// Contact type as the service names it, e.g. `Contact` or `CoopContact`.
    pub contact_type: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub address: Address,
    pub phone_cc: String,
    pub phone: String,
    pub customer_id: u64,
}

impl NewContact {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("type", &self.contact_type)
            .push("name", &self.name)
            .push("company", &self.company)
            .push("email", &self.email)
            .push("phone-cc", &self.phone_cc)
            .push("phone", &self.phone)
            .push("customer-id", self.customer_id)
            .extend(self.address.to_params());
        params
    }
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub username: String,
    pub password: String,
    pub name: String,
    pub company: String,
    pub address: Address,
    pub phone_cc: String,
    pub phone: String,
    pub lang_pref: String,
}

impl NewCustomer {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("username", &self.username)
            .push("passwd", &self.password)
            .push("name", &self.name)
            .push("company", &self.company)
            .push("phone-cc", &self.phone_cc)
            .push("phone", &self.phone)
            .push("lang-pref", &self.lang_pref)
            .extend(self.address.to_params());
        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Success(Value),
    Failure { message: String },
}

impl ApiReply {
    /// Only an object whose `status` is exactly `"ERROR"` counts as a failure.
    pub fn decode(body: Value) -> Self {
        let failed = body
            .as_object()
            .and_then(|map| map.get("status"))
            .and_then(Value::as_str)
            == Some("ERROR");

        if !failed {
            return Self::Success(body);
        }

        let message = match body.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self::Failure { message }
    }

    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Failure { message } => Err(ApiError::Remote { message }),
        }
    }
}

pub fn check_error(body: Value) -> Result<Value, ApiError> {
    ApiReply::decode(body).into_result()
}
