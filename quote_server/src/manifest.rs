//! Plugin descriptor templating and OpenAPI document generation.
//!
//! Both documents served to the hosting chat agent are derived from static
//! inputs plus one configured value, the public plugin hostname:
//!
//! - the descriptor is a JSON template on disk with a `${PLUGIN_HOSTNAME}`
//!   token that gets replaced literally, leaving any other `$` occurrences
//!   untouched;
//! - the OpenAPI document is built in code from the route metadata and has
//!   its `info.servers` field set to the hostname.
//!
//! The functions here are pure; file reads happen in the route handlers.

use serde_json::{Value, json};

use crate::config::AppSection;

/// Token replaced by the configured hostname in the descriptor template.
pub const HOSTNAME_PLACEHOLDER: &str = "${PLUGIN_HOSTNAME}";

/// Replace every occurrence of [`HOSTNAME_PLACEHOLDER`] in `template` with
/// `hostname`. All other text, including unrelated `$` characters, is
/// preserved byte-for-byte.
pub fn substitute_hostname(template: &str, hostname: &str) -> String {
    template.replace(HOSTNAME_PLACEHOLDER, hostname)
}

/// Build the OpenAPI document for the agent-facing API.
///
/// `info.servers` carries the configured hostname so the hosting agent knows
/// where to send requests. Title comes from the config, version and
/// description from the crate metadata.
pub fn openapi_document(app: &AppSection) -> Value {
    json!({
        "openapi": "3.0.2",
        "info": {
            "title": app.title,
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "version": env!("CARGO_PKG_VERSION"),
            "servers": [app.plugin_hostname],
        },
        "paths": {
            "/quotes/random": {
                "get": {
                    "operationId": "random_quote",
                    "summary": "Get a random quote",
                    "description": "Get a random quote. If an author is requested, return a random quote from that author.",
                    "parameters": [
                        {
                            "name": "author",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "A randomly selected quote, or null fields when no quote matched.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/QuoteResponse"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "QuoteResponse": {
                    "type": "object",
                    "properties": {
                        "quote": { "type": "string", "nullable": true },
                        "author": { "type": "string", "nullable": true }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_section(hostname: &str) -> AppSection {
        AppSection {
            title: "Quote Machine".to_string(),
            plugin_hostname: hostname.to_string(),
            port: 8080,
            quotes_file: "quotes.txt".to_string(),
            static_dir: "static".to_string(),
            plugin_manifest: "ai-plugin.json".to_string(),
        }
    }

    #[test]
    fn substitutes_single_token() {
        let template = r#"{"api": {"url": "${PLUGIN_HOSTNAME}/openapi.yaml"}}"#;
        let rendered = substitute_hostname(template, "https://example.com");
        assert_eq!(
            rendered,
            r#"{"api": {"url": "https://example.com/openapi.yaml"}}"#
        );
    }

    #[test]
    fn rendered_output_differs_from_template_only_at_token() {
        let template = "before ${PLUGIN_HOSTNAME} after";
        let rendered = substitute_hostname(template, "https://example.com");
        assert_eq!(rendered, "before https://example.com after");
        assert!(rendered.starts_with("before "));
        assert!(rendered.ends_with(" after"));
    }

    #[test]
    fn leaves_unrelated_dollar_tokens_untouched() {
        let template = "cost: $5, host: ${PLUGIN_HOSTNAME}, other: ${OTHER}";
        let rendered = substitute_hostname(template, "https://example.com");
        assert_eq!(rendered, "cost: $5, host: https://example.com, other: ${OTHER}");
    }

    #[test]
    fn openapi_servers_carry_hostname() {
        let doc = openapi_document(&app_section("https://quotes.example.com"));
        assert_eq!(
            doc["info"]["servers"],
            json!(["https://quotes.example.com"])
        );
        assert_eq!(doc["info"]["title"], "Quote Machine");
    }

    #[test]
    fn openapi_describes_the_random_quote_operation() {
        let doc = openapi_document(&app_section("https://quotes.example.com"));
        let op = &doc["paths"]["/quotes/random"]["get"];
        assert_eq!(op["operationId"], "random_quote");
        assert_eq!(op["parameters"][0]["name"], "author");
        assert!(op["responses"]["200"].is_object());
    }

    #[test]
    fn openapi_renders_as_yaml() {
        let doc = openapi_document(&app_section("https://quotes.example.com"));
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.contains("openapi: 3.0.2"));
        assert!(yaml.contains("https://quotes.example.com"));
    }
}
