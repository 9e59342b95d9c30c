use crate::company::{CompanyRecord, Milestone};
use crate::options::Language;

/// Separator used wherever a list of labels is flattened into one text cell.
pub const LIST_SEPARATOR: &str = ", ";

/// Section titles and field labels for one report language.
#[derive(Debug)]
pub struct Labels {
    pub language: Language,
    pub title_suffix: &'static str,
    /// Placed between a label and its value in list items and news lines.
    pub separator: &'static str,
    pub basic_info: &'static str,
    pub company_name: &'static str,
    pub registration_number: &'static str,
    pub industry_category: &'static str,
    pub industry_subclass: &'static str,
    pub employee_count: &'static str,
    pub capital: &'static str,
    pub address: &'static str,
    pub website: &'static str,
    pub phone: &'static str,
    pub fax: &'static str,
    pub contact_person: &'static str,
    pub profile: &'static str,
    pub main_products: &'static str,
    pub benefits: &'static str,
    pub philosophy: &'static str,
    pub tags: &'static str,
    pub legal_tags: &'static str,
    pub latest_news: &'static str,
    pub news_title: &'static str,
    pub news_link: &'static str,
    pub news_title_column: &'static str,
    pub news_link_column: &'static str,
    pub development_history: &'static str,
}

pub static TRADITIONAL_CHINESE: Labels = Labels {
    language: Language::TraditionalChinese,
    title_suffix: "公司資料",
    separator: "：",
    basic_info: "基本資訊",
    company_name: "公司名稱",
    registration_number: "統一編號",
    industry_category: "產業類別",
    industry_subclass: "產業分類",
    employee_count: "員工人數",
    capital: "資本額",
    address: "公司地址",
    website: "公司網站",
    phone: "公司電話",
    fax: "傳真號碼",
    contact_person: "聯絡人",
    profile: "公司簡介",
    main_products: "主要商品",
    benefits: "福利制度",
    philosophy: "經營理念",
    tags: "公司標籤",
    legal_tags: "法定標籤",
    latest_news: "最新消息",
    news_title: "標題",
    news_link: "連結",
    news_title_column: "最新消息標題",
    news_link_column: "最新消息連結",
    development_history: "公司發展歷程",
};

pub static ENGLISH: Labels = Labels {
    language: Language::English,
    title_suffix: "Company Profile",
    separator: ": ",
    basic_info: "Basic Information",
    company_name: "Company Name",
    registration_number: "Registration Number",
    industry_category: "Industry Category",
    industry_subclass: "Industry Subclass",
    employee_count: "Employees",
    capital: "Capital",
    address: "Address",
    website: "Website",
    phone: "Phone",
    fax: "Fax",
    contact_person: "Contact Person",
    profile: "Profile",
    main_products: "Main Products",
    benefits: "Benefits",
    philosophy: "Philosophy",
    tags: "Tags",
    legal_tags: "Legal Tags",
    latest_news: "Latest News",
    news_title: "Title",
    news_link: "Link",
    news_title_column: "Latest News Title",
    news_link_column: "Latest News Link",
    development_history: "Development History",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::TraditionalChinese => &TRADITIONAL_CHINESE,
            Language::English => &ENGLISH,
        }
    }

    /// Document title for a company, e.g. `測試公司 公司資料`.
    pub fn title(&self, name: &str) -> String {
        format!("{} {}", name, self.title_suffix).trim().to_string()
    }

    pub fn labeled(&self, label: &str, value: &str) -> String {
        format!("{}{}{}", label, self.separator, value)
    }

    /// Sub-heading for a timeline entry: `2020年1月` or `2020-1`.
    pub fn milestone(&self, milestone: &Milestone) -> String {
        match self.language {
            Language::TraditionalChinese => format!("{}年{}月", milestone.year, milestone.month),
            Language::English => format!("{}-{}", milestone.year, milestone.month),
        }
    }

    /// The Basic Information rows, in report order. The name is not included; it is the
    /// document title.
    pub fn basic_fields<'a>(&self, record: &'a CompanyRecord) -> [(&'static str, &'a str); 10] {
        [
            (self.registration_number, record.registration_number.as_str()),
            (self.industry_category, record.industry_category.as_str()),
            (self.industry_subclass, record.industry_subclass.as_str()),
            (self.employee_count, record.employee_count.as_str()),
            (self.capital, record.capital.as_str()),
            (self.address, record.address.as_str()),
            (self.website, record.website.as_str()),
            (self.phone, record.phone.as_str()),
            (self.fax, record.fax.as_str()),
            (self.contact_person, record.contact_person.as_str()),
        ]
    }

    /// The long-form sections, in report order.
    pub fn prose_sections<'a>(&self, record: &'a CompanyRecord) -> [(&'static str, &'a str); 4] {
        [
            (self.profile, record.profile.as_str()),
            (self.main_products, record.main_products.as_str()),
            (self.benefits, record.benefits.as_str()),
            (self.philosophy, record.philosophy.as_str()),
        ]
    }
}
