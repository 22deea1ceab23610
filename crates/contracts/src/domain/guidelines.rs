use serde::{Deserialize, Serialize};

/// Checklist entry shown on guideline details; `isMandatory` items render
/// pre-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub key: String,
    pub label: String,
    #[serde(rename = "isMandatory", default)]
    pub is_mandatory: bool,
}

/// Language-specific guideline content. The English body doubles as the
/// default; the Sinhala translation is sparse and falls back per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuidelineBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub what: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default)]
    pub during: Vec<String>,
    #[serde(default)]
    pub after: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(rename = "mediaUrl", default)]
    pub media_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub si: Option<GuidelineBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub body: GuidelineBody,
    #[serde(default)]
    pub translations: Option<Translations>,
}

/// Create/update payload (`POST /api/labtests`, `PUT /api/labtests/:id`).
#[derive(Debug, Clone, Serialize)]
pub struct GuidelinePayload {
    #[serde(flatten)]
    pub body: GuidelineBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Translations>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Si,
}

impl Guideline {
    /// Merge the requested language over the English body. Empty translated
    /// lists and missing fields fall back to English.
    pub fn localized(&self, lang: Lang) -> GuidelineBody {
        let en = &self.body;
        let si = match (lang, self.translations.as_ref().and_then(|t| t.si.as_ref())) {
            (Lang::Si, Some(si)) => si,
            _ => return en.clone(),
        };
        let pick = |a: &Option<String>, b: &Option<String>| a.clone().or_else(|| b.clone());
        let pick_list = |a: &Vec<String>, b: &Vec<String>| {
            if a.is_empty() { b.clone() } else { a.clone() }
        };
        GuidelineBody {
            name: pick(&si.name, &en.name),
            category: pick(&si.category, &en.category),
            what: pick(&si.what, &en.what),
            why: pick(&si.why, &en.why),
            preparation: pick_list(&si.preparation, &en.preparation),
            during: pick_list(&si.during, &en.during),
            after: pick_list(&si.after, &en.after),
            checklist: if si.checklist.is_empty() {
                en.checklist.clone()
            } else {
                si.checklist.clone()
            },
            media_url: pick(&si.media_url, &en.media_url),
        }
    }

    /// Case-insensitive match over name and category, used by the list
    /// page's search box.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        let hit = |f: &Option<String>| {
            f.as_deref()
                .map(|v| v.to_lowercase().contains(&q))
                .unwrap_or(false)
        };
        hit(&self.body.name) || hit(&self.body.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guideline() -> Guideline {
        serde_json::from_str(
            r#"{
                "_id": "G1",
                "name": "Fasting Blood Sugar",
                "category": "Blood",
                "what": "Measures glucose.",
                "preparation": ["Fast 8 hours"],
                "mediaUrl": "https://img.example/fbs.png",
                "translations": {
                    "si": { "name": "නිරාහාර රුධිර සීනි", "preparation": [] }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn sinhala_falls_back_per_field() {
        let g = guideline();
        let si = g.localized(Lang::Si);
        assert_eq!(si.name.as_deref(), Some("නිරාහාර රුධිර සීනි"));
        // untranslated fields and empty lists keep the English values
        assert_eq!(si.category.as_deref(), Some("Blood"));
        assert_eq!(si.preparation, vec!["Fast 8 hours".to_string()]);
        assert_eq!(si.media_url.as_deref(), Some("https://img.example/fbs.png"));
    }

    #[test]
    fn english_view_ignores_translations() {
        let g = guideline();
        assert_eq!(
            g.localized(Lang::En).name.as_deref(),
            Some("Fasting Blood Sugar")
        );
    }

    #[test]
    fn search_matches_name_or_category() {
        let g = guideline();
        assert!(g.matches("fasting"));
        assert!(g.matches("BLOOD"));
        assert!(!g.matches("x-ray"));
    }

    #[test]
    fn checklist_mandatory_flag_uses_wire_name() {
        let item: ChecklistItem =
            serde_json::from_str(r#"{"key":"k1","label":"Bring NIC","isMandatory":true}"#).unwrap();
        assert!(item.is_mandatory);
    }
}
