//! Run the beta-plane model
//!
//! cargo run --release -- [params.yaml]
use barovort::{integrate, Barotropic2D, Integrate, Params};
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parameters
    let params = match std::env::args().nth(1) {
        Some(fname) => Params::from_yaml(&fname),
        None => Ok(Params::default()),
    };
    let params = match params {
        Ok(params) => params,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // Model
    let mut model = match Barotropic2D::new(&params) {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    model.callback();
    integrate(&mut model, params.max_time, params.save_interval);
}
