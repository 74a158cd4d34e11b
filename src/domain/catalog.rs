//! Static service catalog: categories, their sub-services and prices.
//!
//! The table is a literal list; the identifier index over it is built once on
//! first use. Lookups return `None` for unknown identifiers.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    TestTube,
    Heart,
    Stethoscope,
    Activity,
    Syringe,
    Droplets,
    Cross,
    Shield,
    Zap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubService {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub sub_services: &'static [SubService],
}

impl Category {
    pub fn sub_service(&self, id: &str) -> Option<&SubService> {
        self.sub_services.iter().find(|sub| sub.id == id)
    }
}

const fn sub(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    duration: &'static str,
    icon: Icon,
) -> SubService {
    SubService {
        id,
        name,
        description,
        price,
        duration: Some(duration),
        icon,
    }
}

const CATEGORIES: &[Category] = &[
    Category {
        id: "lab-service",
        name: "Laboratory Services",
        description: "Complete laboratory testing services at your doorstep",
        icon: Icon::TestTube,
        sub_services: &[
            sub(
                "sample-collection",
                "Sample Collection",
                "Professional sample collection service with sterile equipment and proper handling procedures.",
                "NO Charge",
                "15-30 mins",
                Icon::TestTube,
            ),
            sub(
                "blood-test",
                "Blood Test",
                "Comprehensive blood analysis including CBC, lipid profile, liver function, and more.",
                "As Per Blood Test",
                "10-15 mins",
                Icon::Droplets,
            ),
            sub(
                "urine-test",
                "Urine Test",
                "Complete urine analysis for kidney function, infections, and metabolic disorders.",
                "As Per Urine Test",
                "5-10 mins",
                Icon::TestTube,
            ),
            sub(
                "stool-test",
                "Stool Test",
                "Stool examination for digestive health, infections, and parasites.",
                "As Per Stool Test",
                "5-10 mins",
                Icon::TestTube,
            ),
            sub(
                "biopsy",
                "Biopsy",
                "Tissue sample collection for detailed pathological examination.",
                "As Per Test",
                "30-60 mins",
                Icon::Syringe,
            ),
            sub(
                "lab-others",
                "Other Lab Tests",
                "Additional laboratory tests including cultures, genetic tests, and specialized diagnostics.",
                "Contact for pricing",
                "Varies",
                Icon::TestTube,
            ),
        ],
    },
    Category {
        id: "home-care",
        name: "Home Care Services",
        description: "Professional healthcare services in the comfort of your home",
        icon: Icon::Heart,
        sub_services: &[
            sub(
                "blood-pressure",
                "Blood Pressure Measurement",
                "Regular blood pressure monitoring with digital equipment and professional assessment.",
                "₹50",
                "10-15 mins",
                Icon::Activity,
            ),
            sub(
                "cbg-analysis",
                "CBG Analysis",
                "Capillary blood glucose testing for diabetes monitoring and management.",
                "₹100",
                "5-10 mins",
                Icon::TestTube,
            ),
            sub(
                "dressing",
                "Wound Dressing",
                "Professional wound care, dressing changes, and healing assessment.",
                "₹400 onwards",
                "20-45 mins",
                Icon::Cross,
            ),
            sub(
                "vital-checkup",
                "Vital Signs Checkup",
                "Complete vital signs monitoring including temperature, pulse, respiration, and BP.",
                "₹100",
                "15-20 mins",
                Icon::Stethoscope,
            ),
            sub(
                "critical-monitoring",
                "Critical ill Patient Monitoring",
                "24/7 monitoring for critically ill patients with specialized equipment and trained staff.",
                "₹2000 - ₹5000/day",
                "Continuous",
                Icon::Activity,
            ),
            sub(
                "supportive-care",
                "Supportive Care",
                "Comprehensive supportive care including medication administration and patient comfort.",
                "₹1000 - ₹1500/day",
                "As required",
                Icon::Heart,
            ),
        ],
    },
    Category {
        id: "procedures",
        name: "Medical Procedures Services",
        description: "Professional medical procedures performed by certified healthcare providers",
        icon: Icon::Syringe,
        sub_services: &[
            sub(
                "iv-cannulation",
                "IV Cannulation",
                "Expert IV line insertion for medication administration and fluid therapy.",
                "₹200",
                "10-20 mins",
                Icon::Syringe,
            ),
            sub(
                "injections",
                "IV/IM Injections",
                "Safe administration of intravenous and intramuscular injections.",
                "₹100 - ₹400",
                "5-15 mins",
                Icon::Syringe,
            ),
            sub(
                "ng-tube",
                "NG Tube Insertion",
                "Nasogastric tube insertion for feeding or gastric decompression.",
                "₹500 - ₹800",
                "15-30 mins",
                Icon::Stethoscope,
            ),
            sub(
                "catheterization",
                "Urinary Catheterization",
                "Sterile urinary catheter insertion and management.",
                "₹500 - ₹800",
                "15-25 mins",
                Icon::Droplets,
            ),
            sub(
                "procedure-others",
                "Other Procedures",
                "Additional medical procedures including wound suturing, minor surgeries.",
                "Contact for pricing",
                "Varies",
                Icon::Syringe,
            ),
        ],
    },
    Category {
        id: "emergency",
        name: "Emergency & Others Services",
        description: "Emergency medical services and specialized therapies",
        icon: Icon::Shield,
        sub_services: &[
            sub(
                "emergency-medical",
                "Emergency Medical Care",
                "Immediate medical response for emergency situations and acute conditions.",
                "₹1000 - ₹3000",
                "As required",
                Icon::Shield,
            ),
            sub(
                "oxygen-therapy",
                "Oxygen Therapy",
                "Oxygen administration for respiratory support and recovery.",
                "₹500 - ₹1200/day",
                "Continuous",
                Icon::Zap,
            ),
            sub(
                "fluid-therapy",
                "Fluid Therapy",
                "IV fluid administration for dehydration, electrolyte balance, and recovery.",
                "₹400 - ₹800",
                "1-4 hours",
                Icon::Droplets,
            ),
            sub(
                "emergency-others",
                "Other Emergency Services",
                "Additional emergency services including first aid, CPR, and medical transport.",
                "Contact for pricing",
                "As required",
                Icon::Shield,
            ),
        ],
    },
];

pub struct ServiceCatalog {
    categories: &'static [Category],
    by_id: HashMap<&'static str, usize>,
    // sub-service id -> (category index, sub-service index)
    sub_by_id: HashMap<&'static str, (usize, usize)>,
}

impl ServiceCatalog {
    fn build(categories: &'static [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        let mut sub_by_id = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            by_id.insert(category.id, ci);
            for (si, sub) in category.sub_services.iter().enumerate() {
                // 第一個出現者優先
                sub_by_id.entry(sub.id).or_insert((ci, si));
            }
        }

        tracing::debug!(
            "Service catalog indexed: {} categories, {} sub-services",
            by_id.len(),
            sub_by_id.len()
        );

        Self {
            categories,
            by_id,
            sub_by_id,
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn get_service_by_id(&self, id: &str) -> Option<&'static Category> {
        self.by_id.get(id).map(|&i| &self.categories[i])
    }

    pub fn get_sub_service_by_id(
        &self,
        service_id: &str,
        sub_service_id: &str,
    ) -> Option<&'static SubService> {
        self.get_service_by_id(service_id)?
            .sub_services
            .iter()
            .find(|sub| sub.id == sub_service_id)
    }

    /// Find a sub-service by its own identifier, along with its category.
    pub fn find_sub_service(
        &self,
        sub_service_id: &str,
    ) -> Option<(&'static Category, &'static SubService)> {
        let &(ci, si) = self.sub_by_id.get(sub_service_id)?;
        let category = &self.categories[ci];
        Some((category, &category.sub_services[si]))
    }
}

static CATALOG: LazyLock<ServiceCatalog> = LazyLock::new(|| ServiceCatalog::build(CATEGORIES));

pub fn catalog() -> &'static ServiceCatalog {
    &CATALOG
}

pub fn get_all_services() -> &'static [Category] {
    catalog().categories()
}

pub fn get_service_by_id(id: &str) -> Option<&'static Category> {
    catalog().get_service_by_id(id)
}

pub fn get_sub_service_by_id(service_id: &str, sub_service_id: &str) -> Option<&'static SubService> {
    catalog().get_sub_service_by_id(service_id, sub_service_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_categories_keep_their_order() {
        let ids: Vec<_> = get_all_services().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["lab-service", "home-care", "procedures", "emergency"]);
    }

    #[test]
    fn test_sub_service_ids_are_unique() {
        let mut seen = HashSet::new();
        for category in get_all_services() {
            for sub in category.sub_services {
                assert!(seen.insert(sub.id), "duplicate sub-service id {}", sub.id);
            }
        }
        assert_eq!(seen.len(), 21);
    }

    #[test]
    fn test_find_sub_service_returns_owner() {
        let (category, sub) = catalog().find_sub_service("oxygen-therapy").unwrap();
        assert_eq!(category.id, "emergency");
        assert_eq!(sub.price, "₹500 - ₹1200/day");
        assert!(catalog().find_sub_service("other").is_none());
    }

    #[test]
    fn test_category_sub_service_helper() {
        let procedures = get_service_by_id("procedures").unwrap();
        assert_eq!(procedures.sub_service("ng-tube").unwrap().name, "NG Tube Insertion");
        assert!(procedures.sub_service("cbg-analysis").is_none());
    }

    #[test]
    fn test_serializes_with_kebab_icons() {
        let sub = get_sub_service_by_id("lab-service", "biopsy").unwrap();
        let json = serde_json::to_value(sub).unwrap();
        assert_eq!(json["icon"], "syringe");
        assert_eq!(json["duration"], "30-60 mins");
    }
}
