use super::{client::DnsApiClient, error::ApiError, models::*};
use crate::config::Config;
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Url};
use serde_json::Value;

pub const DEFAULT_URL: &str = "https://httpapi.com/api/";

/// Largest page `dns/manage/search-records` will return.
pub const MAX_RECORDS: u32 = 50;

pub struct ResellerClubClient {
    client: reqwest::Client,
    base_url: Url,
    auth: [(&'static str, String); 2],
}

#[async_trait]
impl DnsApiClient for ResellerClubClient {
    async fn activate_dns(&self, domain: &str) -> Result<Value, ApiError> {
        let details = self.domain_details(domain).await?;
        let order_id = entity_id(&details)?;

        let mut params = Params::new();
        params.push("order-id", order_id);
        self.request(Method::POST, "dns/activate", &params).await
    }

    async fn search_records(
        &self,
        domain: &str,
        record_type: &str,
        no_of_records: u32,
        host: Option<String>,
    ) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params
            .push("domain-name", domain)
            .push("type", record_type)
            .push("no-of-records", no_of_records)
            .push("page-no", 1)
            .push_opt("host", host);
        self.request(Method::GET, "dns/manage/search-records", &params)
            .await
    }

    async fn add_record(
        &self,
        kind: RecordKind,
        domain: &str,
        value: &str,
        host: Option<String>,
        ttl: Option<u32>,
    ) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params
            .push("domain-name", domain)
            .push("value", value)
            .push_opt("host", host)
            .push_opt("ttl", ttl.filter(|ttl| *ttl != 0));
        let path = format!("dns/manage/add-{}-record", kind.path_segment());
        self.request(Method::POST, &path, &params).await
    }

    async fn delete_record(
        &self,
        kind: RecordKind,
        domain: &str,
        value: &str,
        host: Option<String>,
    ) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params
            .push("domain-name", domain)
            .push("value", value)
            .push_opt("host", host);
        let path = format!("dns/manage/delete-{}-record", kind.path_segment());
        self.request(Method::POST, &path, &params).await
    }
}

impl ResellerClubClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let url = config.url.as_deref().unwrap_or(DEFAULT_URL);
        let base_url = Url::parse(&append_slash(url)).map_err(|e| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            auth: [
                ("auth-userid", config.user_id.clone()),
                ("api-key", config.api_key.clone()),
            ],
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues one call and decodes the body, without the error check.
    pub async fn request(
        &self,
        method: Method,
        api_method: &str,
        params: &Params,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(api_method)?;
        debug!("{} {}", method, url.path());

        let response = self
            .client
            .request(method, url)
            .query(self.auth.as_slice())
            .query(params.as_pairs())
            .send()
            .await?;

        Ok(response.json::<Value>().await?)
    }

    fn endpoint(&self, api_method: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(&format!("{}.json", api_method))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}.json", self.base_url, api_method),
                reason: e.to_string(),
            })
    }

    pub async fn domain_details(&self, name: &str) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params.push("domain-name", name).push("options", "All");
        self.request(Method::GET, "domains/details-by-name", &params)
            .await
    }

    pub async fn register_domain(
        &self,
        registration: &DomainRegistration,
    ) -> Result<Value, ApiError> {
        let body = self
            .request(Method::POST, "domains/register", &registration.to_params())
            .await?;
        check_error(body)
    }

    pub async fn customer_default_ns(&self, customer_id: u64) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params.push("customer-id", customer_id);
        let body = self
            .request(Method::GET, "domains/customer-default-ns", &params)
            .await?;
        check_error(body)
    }

    pub async fn add_contact(&self, contact: &NewContact) -> Result<Value, ApiError> {
        let body = self
            .request(Method::POST, "contacts/add", &contact.to_params())
            .await?;
        check_error(body)
    }

    pub async fn signup_customer(&self, customer: &NewCustomer) -> Result<Value, ApiError> {
        let body = self
            .request(Method::POST, "customers/signup", &customer.to_params())
            .await?;
        check_error(body)
    }

    pub async fn check_availability(
        &self,
        domain: &str,
        tlds: &[&str],
        suggest_alternative: bool,
    ) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params
            .push("domain-name", domain)
            .push_all("tlds", tlds)
            .push("suggest-alternative", suggest_alternative);
        let body = self
            .request(Method::GET, "domains/available", &params)
            .await?;
        check_error(body)
    }
}

fn append_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

// entityid may arrive as a JSON string or number.
fn entity_id(details: &Value) -> Result<String, ApiError> {
    match details.get("entityid") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ApiError::MissingField {
            operation: "domains/details-by-name",
            field: "entityid",
        }),
    }
}
