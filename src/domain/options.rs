use crate::domain::areas::{is_service_area, OTHER_OPTION, SERVICE_AREAS};
use crate::domain::catalog::catalog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// 下拉選單中的分組（服務類別名稱）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

const OTHER_SERVICE_LABEL: &str = "Other Service (Please specify in message)";
const OTHER_AREA_LABEL: &str = "Other Area (Please specify in message)";

/// One option per catalog sub-service, grouped by category, then "other".
pub fn service_options() -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = catalog()
        .categories()
        .iter()
        .flat_map(|category| {
            category.sub_services.iter().map(move |sub| SelectOption {
                value: sub.id.to_string(),
                label: format!("{} - {}", sub.name, sub.price),
                group: Some(category.name.to_string()),
            })
        })
        .collect();

    options.push(SelectOption {
        value: OTHER_OPTION.to_string(),
        label: OTHER_SERVICE_LABEL.to_string(),
        group: None,
    });
    options
}

pub fn service_area_options() -> Vec<SelectOption> {
    SERVICE_AREAS
        .iter()
        .map(|area| SelectOption {
            value: area.to_string(),
            label: area.to_string(),
            group: None,
        })
        .chain(std::iter::once(SelectOption {
            value: OTHER_OPTION.to_string(),
            label: OTHER_AREA_LABEL.to_string(),
            group: None,
        }))
        .collect()
}

pub fn is_service_option(value: &str) -> bool {
    value == OTHER_OPTION || catalog().find_sub_service(value).is_some()
}

pub fn is_service_area_option(value: &str) -> bool {
    value == OTHER_OPTION || is_service_area(value)
}
