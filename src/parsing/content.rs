//! Wire shape of the `/company/ajax/content/{id}` response.
//!
//! These types mirror the upstream keys one to one and absorb all of the endpoint's
//! inconsistencies (missing keys, `null`s, numbers where text is expected). They are converted
//! into the crate's [`CompanyRecord`](crate::CompanyRecord) exactly once, so nothing downstream
//! has to deal with optional or mistyped fields.

use super::utils::{
    deserialize_lenient_string, deserialize_skip_null_items, deserialize_string_list,
};
use serde::Deserialize;

/// Top-level envelope; the payload sits under `data`.
#[derive(Debug, Deserialize)]
pub struct ContentEnvelope {
    pub data: Option<serde_json::Value>,
}

/// The `data` object of the content response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContent {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub cust_name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub cust_no: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub industry_desc: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub indcat: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub emp_no: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub capital: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub cust_link: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub profile: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub product: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub welfare: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub management: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub fax: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub hr_name: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tag_names: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub legal_tag_names: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub news: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub news_link: String,
    #[serde(default, deserialize_with = "deserialize_skip_null_items")]
    pub historys: Vec<HistoryContent>,
}

/// One `historys` entry. Any of the three keys may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryContent {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub content: String,
}
