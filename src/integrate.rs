//! Integrate trait and driver loop
use log::info;
use std::time::Instant;

const MAX_TIMESTEP: usize = 10_000_000;

/// Report throughput every n steps
const REPORT_STEPS: usize = 100;

/// Integrate trait, step forward in time, and write results
pub trait Integrate {
    /// Update solution
    fn update(&mut self);
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Callback function (can be used for i/o)
    fn callback(&mut self);
    /// Additional break criteria
    fn exit(&mut self) -> bool;
}

/// Integrade pde, that implements the Integrate trait.
///
/// Specify save_intervall to force a callback.
///
/// Stop Criteria:
/// 1. Timestep limit
/// 2. Time limit
/// 3. `exit()` of pde, e.g. diverged solution
pub fn integrate<T: Integrate>(pde: &mut T, max_time: f64, save_intervall: Option<f64>) {
    let mut timestep: usize = 0;
    let eps_dt = pde.get_dt() * 1e-4;
    let mut timeit = Instant::now();
    loop {
        // Update
        pde.update();
        timestep += 1;

        // Throughput
        if timestep % REPORT_STEPS == 0 {
            let sps = REPORT_STEPS as f64 / timeit.elapsed().as_secs_f64();
            info!("Step: {}   Steps per second: {:.2}", timestep, sps);
            timeit = Instant::now();
        }

        // Save
        if let Some(dt_save) = &save_intervall {
            if (pde.get_time() % dt_save) < pde.get_dt() / 2.
                || (pde.get_time() % dt_save) > dt_save - pde.get_dt() / 2.
            {
                pde.callback();
            }
        }

        // Break
        if pde.get_time() + eps_dt >= max_time {
            info!("time limit reached: {:?}", pde.get_time());
            break;
        }
        if timestep >= MAX_TIMESTEP {
            info!("timestep limit reached: {:?}", timestep);
            break;
        }
        if pde.exit() {
            info!("break criteria triggered");
            break;
        }
    }
}
