use std::{fmt, str::FromStr};

/// The pattern used to name the endpoint route of a domain service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EndpointRoutePattern {
    /// Only the type name of the service: `CatalogService/GetCities`.
    Name,
    /// The WCF-compatible layout: `Sample-CatalogService.svc/binary/GetCities`.
    #[default]
    Wcf,
    /// The full name of the service without the WCF suffix: `Sample-CatalogService/GetCities`.
    FullName,
}

impl EndpointRoutePattern {
    /// All patterns, in declaration order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Wcf, Self::FullName];

    /// Build the route for `operation` on the service with the dotted, fully-qualified name
    /// `service`.
    pub fn route(&self, service: &str, operation: &str) -> String {
        match self {
            Self::Name => {
                let name = service.rsplit('.').next().unwrap_or(service);
                format!("{name}/{operation}")
            }
            Self::Wcf => format!("{}.svc/binary/{operation}", service.replace('.', "-")),
            Self::FullName => format!("{}/{operation}", service.replace('.', "-")),
        }
    }
}

impl fmt::Display for EndpointRoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Wcf => write!(f, "WCF"),
            Self::FullName => write!(f, "FullName"),
        }
    }
}

impl FromStr for EndpointRoutePattern {
    type Err = ParseRoutePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "wcf" => Ok(Self::Wcf),
            "fullname" | "full_name" => Ok(Self::FullName),
            _ => Err(ParseRoutePatternError(s.to_owned())),
        }
    }
}

/// Returned when a string doesn't name an [`EndpointRoutePattern`].
#[derive(Clone, PartialEq, Eq)]
pub struct ParseRoutePatternError(String);

impl std::error::Error for ParseRoutePatternError {}

impl fmt::Display for ParseRoutePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown route pattern '{}'. Use Name, WCF or FullName", self.0)
    }
}

impl fmt::Debug for ParseRoutePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
