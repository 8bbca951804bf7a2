use axum::Json;

/// GET /api-docs
/// Machine-readable OpenAPI description of the HTTP surface. It is
/// documentation only: actual behavior is defined by the handlers.
pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "User API",
            "version": "1.0.0",
            "description": "API documentation for the management of posts"
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Retrieve all posts",
                    "responses": {
                        "200": {
                            "description": "A list of posts",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Post" }
                            }}}
                        }
                    }
                }
            },
            "/create": {
                "post": {
                    "summary": "Create a new post",
                    "requestBody": { "content": { "application/json": { "schema": {
                        "$ref": "#/components/schemas/PostPayload"
                    }}}},
                    "responses": {
                        "200": { "description": "Post created successfully" }
                    }
                }
            },
            "/update/{id}": {
                "put": {
                    "summary": "Update an existing post",
                    "parameters": [{
                        "in": "path", "name": "id", "required": true,
                        "schema": { "type": "integer" }
                    }],
                    "requestBody": { "content": { "application/json": { "schema": {
                        "$ref": "#/components/schemas/PostPayload"
                    }}}},
                    "responses": {
                        "200": { "description": "Post updated successfully" },
                        "404": { "description": "Post not found" }
                    }
                }
            },
            "/delete/{id}": {
                "delete": {
                    "summary": "Delete a post by ID",
                    "parameters": [{
                        "in": "path", "name": "id", "required": true,
                        "schema": { "type": "integer" }
                    }],
                    "responses": {
                        "200": { "description": "Post deleted successfully" }
                    }
                }
            },
            "/users": {
                "get": {
                    "summary": "Retrieve all users",
                    "responses": {
                        "200": {
                            "description": "A list of users",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/User" }
                            }}}
                        }
                    }
                }
            },
            "/users/create": {
                "post": {
                    "summary": "Create a new user",
                    "requestBody": { "content": { "application/json": { "schema": {
                        "$ref": "#/components/schemas/UserPayload"
                    }}}},
                    "responses": {
                        "200": { "description": "User created successfully" }
                    }
                }
            },
            "/users/update/{id}": {
                "put": {
                    "summary": "Update an existing user",
                    "parameters": [{
                        "in": "path", "name": "id", "required": true,
                        "schema": { "type": "integer" }
                    }],
                    "requestBody": { "content": { "application/json": { "schema": {
                        "$ref": "#/components/schemas/UserPayload"
                    }}}},
                    "responses": {
                        "200": { "description": "User updated successfully" },
                        "404": { "description": "User not found" }
                    }
                }
            },
            "/users/delete/{id}": {
                "delete": {
                    "summary": "Delete a user by ID",
                    "parameters": [{
                        "in": "path", "name": "id", "required": true,
                        "schema": { "type": "integer" }
                    }],
                    "responses": {
                        "200": { "description": "User deleted successfully" },
                        "404": { "description": "User not found" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Post": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "title": { "type": "string", "nullable": true },
                        "content": { "type": "string", "nullable": true },
                        "description": { "type": "string", "nullable": true },
                        "dateCreation": { "type": "string", "format": "date-time", "nullable": true }
                    }
                },
                "PostPayload": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "content": { "type": "string" },
                        "description": { "type": "string" },
                        "dateCreation": { "type": "string", "format": "date-time" }
                    }
                },
                "User": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "nom": { "type": "string", "nullable": true },
                        "prenom": { "type": "string", "nullable": true },
                        "email": { "type": "string", "nullable": true },
                        "address": { "type": "string", "nullable": true },
                        "password": { "type": "string", "nullable": true }
                    }
                },
                "UserPayload": {
                    "type": "object",
                    "properties": {
                        "nom": { "type": "string" },
                        "prenom": { "type": "string" },
                        "email": { "type": "string" },
                        "address": { "type": "string" },
                        "password": { "type": "string" }
                    }
                }
            }
        }
    }))
}
