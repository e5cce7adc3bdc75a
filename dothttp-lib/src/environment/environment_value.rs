use serde::{Deserialize, Serialize};

/// A configured variable value, either literal or deferred to a secret
/// provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawValue")]
pub struct EnvironmentValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl EnvironmentValue {
    /// Plain (never secret) value holding exactly `value`.
    pub fn from_string(value: Option<String>) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn secret(
        provider: impl Into<String>,
        secret_name: Option<String>,
        resource_id: Option<String>,
    ) -> Self {
        Self {
            value: None,
            provider: Some(provider.into()),
            secret_name,
            resource_id,
        }
    }

    pub fn is_secret(&self) -> bool {
        self.provider
            .as_deref()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }

    /// The provider when it is one of the conventional ones.
    pub fn known_provider(&self) -> Option<KnownProvider> {
        if !self.is_secret() {
            return None;
        }
        self.provider.as_deref().and_then(KnownProvider::from_str)
    }
}

impl From<String> for EnvironmentValue {
    fn from(value: String) -> Self {
        Self::from_string(Some(value))
    }
}

impl From<&str> for EnvironmentValue {
    fn from(value: &str) -> Self {
        Self::from_string(Some(value.to_string()))
    }
}

/// Secret providers with an established meaning. Any other non-blank provider
/// string is still a valid secret reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownProvider {
    AzureKeyVault,
    AspnetUserSecrets,
    Encrypted,
}

impl KnownProvider {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "azurekeyvault" => Some(Self::AzureKeyVault),
            "aspnetusersecrets" => Some(Self::AspnetUserSecrets),
            "encrypted" => Some(Self::Encrypted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AzureKeyVault => "AzureKeyVault",
            Self::AspnetUserSecrets => "AspnetUserSecrets",
            Self::Encrypted => "Encrypted",
        }
    }
}

// Environment files allow bare strings, numbers and booleans next to the
// detailed object form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Detailed(DetailedValue),
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailedValue {
    value: Option<String>,
    provider: Option<String>,
    secret_name: Option<String>,
    resource_id: Option<String>,
}

impl From<RawValue> for EnvironmentValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Detailed(d) => Self {
                value: d.value,
                provider: d.provider,
                secret_name: d.secret_name,
                resource_id: d.resource_id,
            },
            RawValue::Text(s) => Self::from_string(Some(s)),
            RawValue::Number(n) => Self::from_string(Some(n.to_string())),
            RawValue::Bool(b) => Self::from_string(Some(b.to_string())),
            RawValue::Null => Self::from_string(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_provider(provider: Option<&str>) -> EnvironmentValue {
        EnvironmentValue {
            provider: provider.map(str::to_string),
            ..EnvironmentValue::default()
        }
    }

    #[test]
    fn test_is_secret_requires_non_blank_provider() {
        assert!(!with_provider(None).is_secret());
        assert!(!with_provider(Some("")).is_secret());
        assert!(!with_provider(Some("   \t")).is_secret());
        assert!(with_provider(Some("AzureKeyVault")).is_secret());
        assert!(with_provider(Some("my-custom-vault")).is_secret());
    }

    #[test]
    fn test_is_secret_ignores_secret_name_and_resource() {
        let mut v = with_provider(Some("AspnetUserSecrets"));
        assert!(v.is_secret());
        v.secret_name = Some("ApiKey".into());
        v.resource_id = Some("/subscriptions/1".into());
        assert!(v.is_secret());

        let plain = EnvironmentValue {
            secret_name: Some("ApiKey".into()),
            resource_id: Some("/subscriptions/1".into()),
            ..EnvironmentValue::default()
        };
        assert!(!plain.is_secret());
    }

    #[test]
    fn test_from_string_is_never_secret() {
        for input in [Some("AzureKeyVault".to_string()), None, Some(String::new())] {
            let v = EnvironmentValue::from_string(input.clone());
            assert_eq!(v.value, input);
            assert!(!v.is_secret());
            assert!(v.provider.is_none());
            assert!(v.secret_name.is_none());
            assert!(v.resource_id.is_none());
        }
    }

    #[test]
    fn test_known_provider() {
        let v = EnvironmentValue::secret("azurekeyvault", Some("token".into()), None);
        assert_eq!(v.known_provider(), Some(KnownProvider::AzureKeyVault));
        let custom = EnvironmentValue::secret("HashiVault", None, None);
        assert!(custom.is_secret());
        assert_eq!(custom.known_provider(), None);
        assert_eq!(EnvironmentValue::from("x").known_provider(), None);
    }

    #[test]
    fn test_deserialize_shapes() {
        let values: Vec<EnvironmentValue> = serde_json::from_str(
            r#"["plain", 42, true, null,
                {"provider": "AzureKeyVault", "secretName": "apiKey", "resourceId": "/vaults/x"},
                {"value": "inline"}]"#,
        )
        .unwrap();

        assert_eq!(values[0], EnvironmentValue::from("plain"));
        assert_eq!(values[1].value.as_deref(), Some("42"));
        assert_eq!(values[2].value.as_deref(), Some("true"));
        assert_eq!(values[3], EnvironmentValue::from_string(None));
        assert!(values[4].is_secret());
        assert_eq!(values[4].secret_name.as_deref(), Some("apiKey"));
        assert_eq!(values[4].resource_id.as_deref(), Some("/vaults/x"));
        assert_eq!(values[5].value.as_deref(), Some("inline"));
        assert!(!values[5].is_secret());
    }
}
