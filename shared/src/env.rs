use std::{env, str::FromStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Reads `ENV` and falls back to the build profile when it is unset or unknown.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => v.parse().unwrap_or(default_env),
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[test]
    fn parses_known_environment_names() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!(" Dev ".parse(), Ok(Environment::Development));
        assert!("staging".parse::<Environment>().is_err());
    }
}
