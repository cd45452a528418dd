use std::path::PathBuf;

pub fn default_workspace() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_install_command() -> String {
    "npm install".to_string()
}

pub fn default_build_command() -> String {
    "npm run build".to_string()
}

pub fn default_dist_path() -> PathBuf {
    PathBuf::from(".next")
}

pub fn default_serverless() -> bool {
    true // Next.js serverless target writes serverless/pages-manifest.json
}
