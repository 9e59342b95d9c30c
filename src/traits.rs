//! Trait definitions for job bank operations.
//!
//! The [`JobBank`](crate::JobBank) client implements [`ProfileOperations`]. Most users call the
//! methods on the client directly; the trait exists so that code driving an export can be
//! written against an interface and exercised with a stub in tests.

use super::company::CompanyRecord;
use super::error::Result;
use super::options::ExportOptions;
use super::render::RenderReport;
use async_trait::async_trait;

/// Operations for retrieving and exporting company profiles.
///
/// Profiles come from the content endpoint behind a company's public page. Each call fetches
/// exactly one company; nothing is cached between calls.
#[async_trait]
pub trait ProfileOperations {
    /// Retrieves the raw content endpoint body for a company id.
    async fn company_content(&self, company_id: &str) -> Result<String>;
    /// Retrieves and parses the profile of a company id.
    async fn company_profile(&self, company_id: &str) -> Result<CompanyRecord>;
    /// Parses a content endpoint body from a string.
    fn company_profile_from_string(&self, content: &str) -> Result<CompanyRecord>;
    /// Retrieves a profile and writes every export format into the configured directory.
    async fn export_profile(
        &self,
        company_id: &str,
        options: &ExportOptions,
    ) -> Result<RenderReport>;
}
