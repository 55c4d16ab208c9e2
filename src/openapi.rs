use serde_json::{Value, json};

/// Hand-maintained OpenAPI 3.0.3 document for the public surface. The only
/// dynamic piece is the server URL, substituted per request.
pub fn schema(base_url: &str) -> Value {
    let server_url = if base_url.is_empty() { "/" } else { base_url };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Portfolio API",
            "version": "1.0.0",
            "description": "API для проектов, отправки формы и соц. ссылок",
        },
        "servers": [{"url": server_url}],
        "paths": {
            "/api/projects/": {
                "get": {
                    "summary": "Список проектов",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": {"$ref": "#/components/schemas/Project"}
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/api/projects/{id}/": {
                "get": {
                    "summary": "Детали проекта",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/Project"}
                                }
                            }
                        },
                        "404": {"description": "Not Found"}
                    }
                }
            },
            "/api/contact/": {
                "post": {
                    "summary": "Отправка сообщения формы",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/ContactRequest"}},
                            "application/x-www-form-urlencoded": {"schema": {"$ref": "#/components/schemas/ContactRequest"}},
                        }
                    },
                    "responses": {
                        "200": {"description": "OK", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/OkResponse"}}}},
                        "400": {"description": "Bad Request"}
                    }
                }
            },
            "/api/contact/resend/": {
                "post": {
                    "summary": "Повторная отправка сообщений в Telegram",
                    "security": [{"AdminToken": []}],
                    "requestBody": {
                        "required": false,
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/ResendRequest"}},
                        }
                    },
                    "responses": {
                        "200": {"description": "OK", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ResendResponse"}}}},
                        "401": {"description": "Unauthorized"}
                    }
                }
            },
            "/api/social-links/": {
                "get": {
                    "summary": "Получить соц. ссылки",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SocialLinks"}}}
                        }
                    }
                },
                "post": {
                    "summary": "Обновить соц. ссылки",
                    "security": [{"AdminToken": []}],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/SocialLinks"}},
                            "application/x-www-form-urlencoded": {"schema": {"$ref": "#/components/schemas/SocialLinks"}},
                        }
                    },
                    "responses": {
                        "200": {"description": "OK", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/OkResponse"}}}},
                        "401": {"description": "Unauthorized"}
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "AdminToken": {
                    "type": "apiKey",
                    "in": "header",
                    "name": "X-Admin-Token",
                    "description": "Shared admin token из настроек сервера",
                }
            },
            "schemas": {
                "Project": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "name": {"type": "string"},
                        "subtitle": {"type": "string"},
                        "description": {"type": "string"},
                        "description_en": {"type": "string", "nullable": true},
                        "category": {"type": "string", "enum": ["experience", "freelance", "personal"]},
                        "category_label": {"type": "string"},
                        "release_date": {"type": "string", "format": "date", "nullable": true},
                        "work_period": {
                            "type": "object",
                            "properties": {
                                "start": {"type": "string", "format": "date", "nullable": true},
                                "end": {"type": "string", "format": "date", "nullable": true}
                            }
                        },
                        "links": {
                            "type": "object",
                            "properties": {
                                "google_play": {"type": "string", "format": "uri", "nullable": true},
                                "rustore": {"type": "string", "format": "uri", "nullable": true},
                                "appstore": {"type": "string", "format": "uri", "nullable": true},
                                "github": {"type": "string", "format": "uri", "nullable": true},
                                "extra_social": {"type": "string", "format": "uri", "nullable": true}
                            }
                        },
                        "image": {"type": "string", "format": "uri", "nullable": true},
                        "created_at": {"type": "string", "format": "date-time"},
                        "updated_at": {"type": "string", "format": "date-time"}
                    }
                },
                "ContactRequest": {
                    "type": "object",
                    "required": ["full_name", "email", "message"],
                    "properties": {
                        "full_name": {"type": "string"},
                        "email": {"type": "string", "format": "email"},
                        "message": {"type": "string"}
                    }
                },
                "ResendRequest": {
                    "type": "object",
                    "properties": {
                        "ids": {
                            "type": "array",
                            "items": {"type": "integer"},
                            "nullable": true
                        }
                    }
                },
                "ResendResponse": {
                    "type": "object",
                    "properties": {"sent": {"type": "integer"}}
                },
                "SocialLinks": {
                    "type": "object",
                    "properties": {
                        "telegram": {"type": "string", "format": "uri"},
                        "github": {"type": "string", "format": "uri"},
                        "linkedin": {"type": "string", "format": "uri"}
                    }
                },
                "OkResponse": {
                    "type": "object",
                    "properties": {"ok": {"type": "boolean"}}
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_is_substituted() {
        let doc = schema("http://127.0.0.1:8080");
        assert_eq!(doc["servers"][0]["url"], "http://127.0.0.1:8080");
        assert_eq!(doc["openapi"], "3.0.3");
    }

    #[test]
    fn empty_base_url_falls_back_to_root() {
        let doc = schema("");
        assert_eq!(doc["servers"][0]["url"], "/");
    }

    #[test]
    fn every_public_path_is_documented() {
        let doc = schema("http://x.test");
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/projects/",
            "/api/projects/{id}/",
            "/api/contact/",
            "/api/contact/resend/",
            "/api/social-links/",
        ] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }
    }
}
