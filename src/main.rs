// main.rs
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::{FormConfig, JsonConfig};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use my_pregnancy_api::{controllers, db};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let config = match db::DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Konfigurasi database tidak valid: {}", e);
            std::process::exit(1);
        }
    };
    let pool = match db::establish_connection(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Gagal inisialisasi pool database: {:?}", e);
            std::process::exit(1);
        }
    };

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    HttpServer::new(move || {
        // Endpoint dipanggil dari aplikasi mobile/web mana saja
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE]);

        let json_config = JsonConfig::default()
            .content_type_required(false) // Kadang header content-type tidak tepat
            .error_handler(|err, _req| {
                log::error!("JSON payload error: {}", err);
                actix_web::error::ErrorBadRequest(format!("Payload error: {}", err))
            });

        // Untuk form data
        let form_config = FormConfig::default().error_handler(|err, _req| {
            log::error!("Form payload error: {}", err);
            actix_web::error::ErrorBadRequest(format!("Form error: {}", err))
        });

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config)
            .app_data(form_config)
            .wrap(cors)
            .wrap(Logger::default())
            .service(controllers::checkup_controller::get_data_ibu)
            .service(controllers::checkup_controller::insert_data_ibu)
    })
    .bind((host, port))?
    .run()
    .await
}
