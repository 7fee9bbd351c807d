pub const PACKAGE_JSON: &str = r#"{
  "name": "notecam-system",
  "version": "1.0.0",
  "description": "NoteCam multi-user system",
  "main": "index.html",
  "scripts": {
    "start": "live-server"
  }
}"#;

pub const README: &str = "# NoteCam System\n\nAn integrated system for managing reports and photos.\n";

pub const GITIGNORE: &str = "node_modules/\n.DS_Store\n*.log\n";

/// Initial contents for a scaffolded file, chosen by its name alone.
pub fn content_for(file_name: &str) -> String {
    match file_name {
        "package.json" => PACKAGE_JSON.to_string(),
        "README.md" => README.to_string(),
        ".gitignore" => GITIGNORE.to_string(),
        other => format!("// file {}\n", other),
    }
}
