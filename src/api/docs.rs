/// Generate Markdown documentation for the content API.
pub fn generate_markdown_docs() -> String {
    let mut markdown = String::new();

    markdown.push_str("# Portfolio Backend API Documentation\n\n");
    markdown.push_str("## Overview\n\n");
    markdown.push_str("Backend for a personal portfolio site. Three content collections (projects, research, academics) are stored as flat JSON files and managed through REST endpoints; images are uploaded to a public directory and served statically.\n\n");

    markdown.push_str("## Base URL\n\n");
    markdown.push_str("```\nhttp://localhost:8080/api\n```\n\n");

    markdown.push_str("## Collections\n\n");
    for (name, item, delete_note) in [
        (
            "projects",
            "project",
            "DELETE always reports success, even for an unknown id.",
        ),
        (
            "research",
            "research item",
            "DELETE returns 404 when the id matches nothing.",
        ),
        (
            "academics",
            "academic",
            "DELETE returns 404 when the id matches nothing.",
        ),
    ] {
        markdown.push_str(&format!("### /api/{}\n\n", name));
        markdown.push_str(&format!(
            "**GET** — full list of {}s as a JSON array.\n\n",
            item
        ));
        markdown.push_str(&format!(
            "**POST** — append one {}. A missing `id` is assigned from the current timestamp. Returns the stored record.\n\n",
            item
        ));
        markdown.push_str(&format!(
            "**PUT** — replace the {} whose `id` matches the body, whole-record. 404 if the id is unknown.\n\n",
            item
        ));
        markdown.push_str(&format!(
            "**DELETE** — `?id=<id>` removes the matching record. 400 without the parameter. {}\n\n",
            delete_note
        ));
    }

    markdown.push_str("### POST /api/upload\n\n");
    markdown.push_str("**Description:** Upload one image (multipart/form-data, field name 'file'). The filename is sanitized to alphanumerics, dot and hyphen, prefixed with a millisecond timestamp, and served under `/uploads/`.\n\n");
    markdown.push_str("**Response:**\n```json\n{\n  \"url\": \"/uploads/1754000000000-photo.png\",\n  \"filename\": \"1754000000000-photo.png\",\n  \"size\": 52341,\n  \"type\": \"image/png\"\n}\n```\n\n");

    markdown.push_str("### GET /api/testimonials\n\n");
    markdown.push_str("**Description:** Fixed testimonial list rendered on the home page.\n\n");

    markdown.push_str("## Error Codes\n\n");
    markdown.push_str("| Status | Meaning |\n|---|---|\n");
    markdown.push_str("| 400 | Missing `id` query parameter or missing `file` field |\n");
    markdown.push_str("| 404 | Record id not present in the collection |\n");
    markdown.push_str("| 500 | File read/write or serialization failure (details are logged server-side) |\n\n");

    markdown.push_str("Error bodies are `{ \"error\": \"<message>\" }`.\n");

    markdown
}

/// Generate the HTML landing page for `/docs`.
pub fn generate_documentation_html() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Portfolio Backend API</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 2rem; background: #faf8f4; color: #222; }
        h1 { border-bottom: 2px solid #C7A86F; padding-bottom: 0.5rem; }
        .endpoint { background: #fff; border: 1px solid #e5e0d6; border-radius: 6px; padding: 1rem; margin: 1rem 0; }
        .method { display: inline-block; font-weight: 700; padding: 0.1rem 0.5rem; border-radius: 4px; color: #fff; margin-right: 0.5rem; }
        .get { background: #2f855a; } .post { background: #2b6cb0; } .put { background: #b7791f; } .delete { background: #c53030; }
        code { background: #f2ede3; padding: 0.1rem 0.3rem; border-radius: 3px; }
        a { color: #2b6cb0; }
    </style>
</head>
<body>
    <h1>Portfolio Backend API</h1>
    <p>Content management endpoints for the portfolio site. Interactive docs:
       <a href="/api/docs">Swagger UI</a> · <a href="/api/redoc">Redoc</a> ·
       <a href="/docs/markdown">Markdown</a> · <a href="/docs/openapi.json">OpenAPI JSON</a></p>

    <div class="endpoint"><span class="method get">GET</span><span class="method post">POST</span><span class="method put">PUT</span><span class="method delete">DELETE</span><code>/api/projects</code>
        <p>Portfolio projects. DELETE takes <code>?id=</code>.</p></div>
    <div class="endpoint"><span class="method get">GET</span><span class="method post">POST</span><span class="method put">PUT</span><span class="method delete">DELETE</span><code>/api/research</code>
        <p>Research items. DELETE takes <code>?id=</code>.</p></div>
    <div class="endpoint"><span class="method get">GET</span><span class="method post">POST</span><span class="method put">PUT</span><span class="method delete">DELETE</span><code>/api/academics</code>
        <p>Academic entries. DELETE takes <code>?id=</code>.</p></div>
    <div class="endpoint"><span class="method post">POST</span><code>/api/upload</code>
        <p>Multipart image upload, field name <code>file</code>. Stored files are served from <code>/uploads/</code>.</p></div>
    <div class="endpoint"><span class="method get">GET</span><code>/api/testimonials</code>
        <p>Fixed testimonial list.</p></div>
    <div class="endpoint"><span class="method get">GET</span><code>/health</code>
        <p>Liveness check.</p></div>
</body>
</html>
"#
    .to_string()
}
