// server/src/startup.rs

use actix_web::dev::Server;
use actix_web::{web as actix_data, App, HttpServer};
use std::net::TcpListener;

use crate::state::AppState;
use crate::web::configure_app_routes;

/// Builds the HTTP server on an already bound listener. The returned future must be awaited or spawned.
pub fn run(listener: TcpListener, app_state: AppState) -> std::io::Result<Server> {
  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .listen(listener)?
  .run();
  Ok(server)
}
