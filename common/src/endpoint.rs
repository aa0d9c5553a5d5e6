use std::fmt;

/// One configuration source handed to the engine: a display name (usually
/// the file name) and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub name: String,
    pub text: String,
}

impl ConfigSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A host declared in a config source.
///
/// Duplicates are legal and each one is probed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointIdentity {
    pub source: String,
    pub host: String,
}

impl EndpointIdentity {
    pub fn new(source: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            host: host.into(),
        }
    }
}

impl fmt::Display for EndpointIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_source_and_host() {
        let id = EndpointIdentity::new("vultr.conf", "sgp-ping.vultr.com");
        assert_eq!(id.to_string(), "vultr.conf: sgp-ping.vultr.com");
    }
}
