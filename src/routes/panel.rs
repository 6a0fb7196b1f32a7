use actix_files::{Files, NamedFile};
use actix_web::{get, web};
use std::path::{Path, PathBuf};

/// Directory holding `index.html` and the assets under `/static`.
pub struct StaticDir(pub PathBuf);

#[get("/")]
async fn index(dir: web::Data<StaticDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(dir.0.join("index.html")).await?)
}

pub fn init(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(web::Data::new(StaticDir(static_dir.to_path_buf())));
    cfg.service(index);
    cfg.service(Files::new("/static", static_dir));
}
