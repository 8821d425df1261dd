use form_demo::NumberFormApp;
use mimalloc::MiMalloc;
use platform::EventLoopError;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!(target: "numfield", "starting number entry demo");
    platform::run(NumberFormApp::new())
}
