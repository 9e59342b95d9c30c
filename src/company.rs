//! Company profile record and the content endpoint.
//!
//! A company on the 104 job bank is addressed by a short alphanumeric id (the last path segment
//! of its public page, e.g. `e6o7g3l`). The page itself is rendered client side from
//! `/company/ajax/content/{id}`, a JSON document whose `data` object holds everything shown on
//! the profile: identity, contact details, prose sections, labels, the latest news item, and a
//! development timeline.
//!
//! [`CompanyRecord`] is the crate's fixed-shape view of that object. Every field is plain text
//! or a list, missing upstream keys become empty values, and the record serializes with stable
//! camelCase keys so the JSON export can be read back into an identical record.

use super::JobBank;
use super::ProfileOperations;
use super::error::{JobBankError, Result};
use super::options::ExportOptions;
use super::parsing::content::{CompanyContent, ContentEnvelope, HistoryContent};
use super::render::{RenderReport, Renderer};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A company profile as extracted from the content endpoint.
///
/// The record is built once per fetch and only ever read afterwards; every renderer takes it
/// by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyRecord {
    pub name: String,
    pub registration_number: String,
    pub industry_category: String,
    pub industry_subclass: String,
    /// Headcount as published; free text such as "50人" is common.
    pub employee_count: String,
    pub capital: String,
    pub address: String,
    pub website: String,
    pub profile: String,
    pub main_products: String,
    pub benefits: String,
    pub philosophy: String,
    pub phone: String,
    pub fax: String,
    pub contact_person: String,
    pub tags: Vec<String>,
    pub legal_tags: Vec<String>,
    pub latest_news: LatestNews,
    /// Milestones in the order the endpoint returned them.
    pub development_history: Vec<Milestone>,
}

/// The single news item shown on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestNews {
    pub title: String,
    pub link: String,
}

/// One entry of a company's development timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub year: String,
    pub month: String,
    pub content: String,
}

impl From<CompanyContent> for CompanyRecord {
    fn from(content: CompanyContent) -> Self {
        CompanyRecord {
            name: content.cust_name,
            registration_number: content.cust_no,
            industry_category: content.industry_desc,
            industry_subclass: content.indcat,
            employee_count: content.emp_no,
            capital: content.capital,
            address: content.address,
            website: content.cust_link,
            profile: content.profile,
            main_products: content.product,
            benefits: content.welfare,
            philosophy: content.management,
            phone: content.phone,
            fax: content.fax,
            contact_person: content.hr_name,
            tags: content.tag_names,
            legal_tags: content.legal_tag_names,
            latest_news: LatestNews {
                title: content.news,
                link: content.news_link,
            },
            development_history: content
                .historys
                .into_iter()
                .map(Milestone::from)
                .collect(),
        }
    }
}

impl From<HistoryContent> for Milestone {
    fn from(history: HistoryContent) -> Self {
        Milestone {
            year: history.year,
            month: history.month,
            content: history.content,
        }
    }
}

/// Parses a content endpoint response body into a [`CompanyRecord`].
///
/// # Errors
///
/// * `JobBankError::JsonError` - The body is not JSON, or a field has a shape that cannot be
///   read as text or a list of text
/// * `JobBankError::InvalidResponse` - The body has no `data` key, or `data` is not an object
pub fn parse_company_content(content: &str) -> Result<CompanyRecord> {
    let envelope: ContentEnvelope = serde_json::from_str(content)?;

    let data = envelope
        .data
        .filter(serde_json::Value::is_object)
        .ok_or_else(|| JobBankError::InvalidResponse("Missing 'data' object".to_string()))?;

    let company: CompanyContent = serde_json::from_value(data)?;
    Ok(CompanyRecord::from(company))
}

/// Checks that a company id is safe to splice into a URL path.
fn validate_company_id(company_id: &str) -> Result<()> {
    if company_id.is_empty() || !company_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(JobBankError::InvalidCompanyId(company_id.to_string()));
    }
    Ok(())
}

#[derive(Debug)]
enum CompanyUrlType {
    Content,
    Page,
}

/// Builds URLs for the company endpoints.
///
/// `Content` is the JSON endpoint, `Page` the public profile page that the site's own front
/// end sends as `Referer` when it calls `Content`.
impl JobBank {
    fn build_company_url(&self, url_type: CompanyUrlType, company_id: &str) -> Result<String> {
        validate_company_id(company_id)?;
        match url_type {
            CompanyUrlType::Content => Ok(format!(
                "{}/company/ajax/content/{}?resourceStatus=1",
                self.base_url, company_id
            )),
            CompanyUrlType::Page => Ok(format!("{}/company/{}", self.base_url, company_id)),
        }
    }
}

/// Company profile operations for the 104 job bank.
///
/// # Examples
///
/// ```ignore
/// # use jobbank::{ExportOptions, JobBank, ProfileOperations};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JobBank::new("Mozilla/5.0 (X11; Linux x86_64)")?;
///
/// let record = client.company_profile("e6o7g3l").await?;
/// println!("{} ({})", record.name, record.registration_number);
///
/// let report = client
///     .export_profile("e6o7g3l", &ExportOptions::new().with_output_dir("output"))
///     .await?;
/// for path in report.into_result()? {
///     println!("wrote {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl ProfileOperations for JobBank {
    /// Fetches the raw content endpoint body for a company.
    ///
    /// # Errors
    ///
    /// * `JobBankError::InvalidCompanyId` - The id is empty or not ASCII alphanumeric
    /// * Any transport error from [`JobBank::get`]
    async fn company_content(&self, company_id: &str) -> Result<String> {
        let url = self.build_company_url(CompanyUrlType::Content, company_id)?;
        let referer = self.build_company_url(CompanyUrlType::Page, company_id)?;
        self.get(&url, Some(&referer)).await
    }

    /// Fetches and parses a company profile.
    async fn company_profile(&self, company_id: &str) -> Result<CompanyRecord> {
        let content = self.company_content(company_id).await?;
        let record = self.company_profile_from_string(&content)?;
        tracing::info!(
            company_id,
            name = %record.name,
            milestones = record.development_history.len(),
            "extracted company profile"
        );
        Ok(record)
    }

    /// Parses a content endpoint body that was obtained elsewhere.
    fn company_profile_from_string(&self, content: &str) -> Result<CompanyRecord> {
        parse_company_content(content)
    }

    /// Fetches a company profile and writes all export formats for it.
    ///
    /// The output directory is created if needed. Failures of individual formats are
    /// collected in the returned report rather than aborting the export; fetch failures and
    /// a failure to create the directory are returned as errors.
    async fn export_profile(
        &self,
        company_id: &str,
        options: &ExportOptions,
    ) -> Result<RenderReport> {
        let record = self.company_profile(company_id).await?;
        Renderer::new(options.language).export(&record, &options.output_dir)
    }
}
