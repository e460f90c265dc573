// Copyright (c) 2025 Centime contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category catalog: expense and income categories with display
//! metadata, plus the fixed-charge type list. Catalog order is significant
//! (it drives the plan wizard and advice iteration).

use crate::models::TxKind;

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub subcategories: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ChargeTypeDef {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const EXPENSE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "alimentation",
        name: "Alimentation",
        icon: "🍽️",
        subcategories: &["Courses", "Restaurant", "Snacks", "Marché"],
    },
    CategoryDef {
        key: "transport",
        name: "Transport",
        icon: "🚗",
        subcategories: &[
            "Carburant",
            "Transport en commun",
            "Taxi/Moto",
            "Entretien véhicule",
        ],
    },
    CategoryDef {
        key: "logement",
        name: "Logement",
        icon: "🏠",
        subcategories: &["Loyer", "Électricité", "Eau", "Internet", "Entretien"],
    },
    CategoryDef {
        key: "sante",
        name: "Santé",
        icon: "⚕️",
        subcategories: &["Médicaments", "Consultations", "Urgences", "Assurance"],
    },
    CategoryDef {
        key: "loisirs",
        name: "Loisirs",
        icon: "🎮",
        subcategories: &["Sorties", "Sport", "Hobbies", "Vacances"],
    },
    CategoryDef {
        key: "vetements",
        name: "Vêtements",
        icon: "👔",
        subcategories: &["Vêtements", "Chaussures", "Coiffure", "Soins personnels"],
    },
    CategoryDef {
        key: "education",
        name: "Éducation",
        icon: "📚",
        subcategories: &["Scolarité", "Livres", "Formations", "Fournitures"],
    },
    CategoryDef {
        key: "abonnements",
        name: "Abonnements",
        icon: "📱",
        subcategories: &["Téléphone", "Streaming", "Salle de sport", "Autres"],
    },
    CategoryDef {
        key: "autre",
        name: "Autre",
        icon: "📦",
        subcategories: &["Divers", "Cadeaux", "Imprévus"],
    },
];

pub const INCOME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        key: "salaire",
        name: "Salaire",
        icon: "💼",
        subcategories: &[],
    },
    CategoryDef {
        key: "freelance",
        name: "Freelance",
        icon: "💻",
        subcategories: &[],
    },
    CategoryDef {
        key: "investissement",
        name: "Investissement",
        icon: "📈",
        subcategories: &[],
    },
    CategoryDef {
        key: "aide",
        name: "Aide/Allocation",
        icon: "🤝",
        subcategories: &[],
    },
    CategoryDef {
        key: "autre",
        name: "Autre",
        icon: "💰",
        subcategories: &[],
    },
];

pub const FIXED_CHARGE_TYPES: &[ChargeTypeDef] = &[
    ChargeTypeDef { key: "loyer", label: "Loyer / Hypothèque", icon: "🏠" },
    ChargeTypeDef { key: "electricite", label: "Électricité", icon: "💡" },
    ChargeTypeDef { key: "eau", label: "Eau", icon: "💧" },
    ChargeTypeDef { key: "internet", label: "Internet / Téléphone", icon: "📡" },
    ChargeTypeDef { key: "assurance", label: "Assurances", icon: "🛡️" },
    ChargeTypeDef { key: "abonnement", label: "Abonnements", icon: "📺" },
    ChargeTypeDef { key: "credit", label: "Crédits / Emprunts", icon: "🏦" },
    ChargeTypeDef { key: "scolarite", label: "Scolarité", icon: "🎓" },
    ChargeTypeDef { key: "autre", label: "Autre", icon: "📋" },
];

/// Display info for a category key, synthesized when the key is unknown.
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: &'static str,
}

pub fn categories_for(kind: TxKind) -> &'static [CategoryDef] {
    match kind {
        TxKind::Expense => EXPENSE_CATEGORIES,
        TxKind::Income => INCOME_CATEGORIES,
    }
}

pub fn find(key: &str, kind: TxKind) -> Option<&'static CategoryDef> {
    categories_for(kind).iter().find(|c| c.key == key)
}

pub fn is_valid(key: &str, kind: TxKind) -> bool {
    find(key, kind).is_some()
}

/// Lookup that never fails: unknown keys get the raw key as name and a
/// generic box icon.
pub fn category_info(key: &str, kind: TxKind) -> CategoryInfo {
    match find(key, kind) {
        Some(def) => CategoryInfo {
            name: def.name.to_string(),
            icon: def.icon,
        },
        None => CategoryInfo {
            name: key.to_string(),
            icon: "📦",
        },
    }
}

pub fn charge_type(key: &str) -> Option<&'static ChargeTypeDef> {
    FIXED_CHARGE_TYPES.iter().find(|t| t.key == key)
}
