use serde::{Deserialize, Serialize};

/// The stored singleton. At most one row exists (fixed key), and the rest of
/// the system only ever sees it through [`SocialLinksView`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SocialLinks {
    pub telegram: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// Write payload. Fields missing from the body default to empty strings,
/// matching the read shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialLinksForm {
    pub telegram: String,
    pub github: String,
    pub linkedin: String,
}

impl SocialLinksForm {
    pub fn trimmed(self) -> Self {
        SocialLinksForm {
            telegram: self.telegram.trim().to_string(),
            github: self.github.trim().to_string(),
            linkedin: self.linkedin.trim().to_string(),
        }
    }
}

/// Read shape: empty strings, never null, even when no row exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinksView {
    pub telegram: String,
    pub github: String,
    pub linkedin: String,
}

impl From<Option<SocialLinks>> for SocialLinksView {
    fn from(record: Option<SocialLinks>) -> Self {
        let record = record.unwrap_or(SocialLinks {
            telegram: None,
            github: None,
            linkedin: None,
        });
        SocialLinksView {
            telegram: record.telegram.unwrap_or_default(),
            github: record.github.unwrap_or_default(),
            linkedin: record.linkedin.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_record_reads_as_empty_strings() {
        let view = SocialLinksView::from(None);
        assert_eq!(view.telegram, "");
        assert_eq!(view.github, "");
        assert_eq!(view.linkedin, "");
    }

    #[test]
    fn partial_record_fills_only_missing_fields() {
        let view = SocialLinksView::from(Some(SocialLinks {
            telegram: Some("https://t.me/someone".into()),
            github: None,
            linkedin: None,
        }));
        assert_eq!(view.telegram, "https://t.me/someone");
        assert_eq!(view.github, "");
    }

    #[test]
    fn form_values_are_trimmed() {
        let form = SocialLinksForm {
            telegram: "  https://t.me/someone ".into(),
            github: String::new(),
            linkedin: "\thttps://linkedin.com/in/x\n".into(),
        }
        .trimmed();
        assert_eq!(form.telegram, "https://t.me/someone");
        assert_eq!(form.linkedin, "https://linkedin.com/in/x");
    }
}
