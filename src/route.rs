//! Screen addresses.
//!
//! Routes use the same path syntax a browser address bar would:
//! `/`, `/session/{id}` and `/feedback`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    SessionDetail(i64),
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen address '{0}'")]
pub struct RouteParseError(pub String);

impl Route {
    /// Parse an address such as `/session/7`.
    pub fn parse(path: &str) -> Result<Self, RouteParseError> {
        let Some(rest) = path.trim().strip_prefix('/') else {
            return Err(RouteParseError(path.to_string()));
        };
        let segments: Vec<&str> = rest.trim_end_matches('/').split('/').collect();

        match segments.as_slice() {
            [""] => Ok(Route::Dashboard),
            ["feedback"] => Ok(Route::Feedback),
            ["session", id] => match id.parse::<i64>() {
                Ok(id) if id > 0 => Ok(Route::SessionDetail(id)),
                _ => Err(RouteParseError(path.to_string())),
            },
            _ => Err(RouteParseError(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::SessionDetail(id) => format!("/session/{}", id),
            Route::Feedback => "/feedback".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
