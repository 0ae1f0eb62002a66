//! Replays a scripted gesture through the pipeline over a loopback link.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline decisions; measurement
//! files land in `./touch`.

use tremor_geometry::Size;
use tremor_input::TouchSample;
use tremor_link::{LinkEvent, LoopbackLink, spawn_dispatcher};
use tremor_recorder::{MeasurementStore, spawn_writer};
use tremor_session::{SessionConfig, SessionPipeline};

fn main() {
    env_logger::init();

    let config = SessionConfig::default();
    let (commands, command_worker) = spawn_dispatcher(LoopbackLink::default(), config.service);
    let (recorder, record_worker) = spawn_writer(MeasurementStore::new(&config.storage_dir));
    let mut pipeline = SessionPipeline::new(&config, commands, recorder);

    pipeline.link_event(LinkEvent::Connected);
    pipeline.link_event(LinkEvent::ServiceReady);
    pipeline.surface_resized(Size::new(1080.0, 1920.0));

    for sample in [
        TouchSample::begin((540.0, 960.0)),
        TouchSample::moved((560.0, 960.0)),
        TouchSample::moved((580.0, 985.0)),
        TouchSample::end((580.0, 985.0)),
    ] {
        pipeline.pointer_sample(sample);
    }

    drop(pipeline);
    let dispatcher = command_worker.join().unwrap();
    record_worker.join().unwrap();

    println!(
        "Wire bytes: {}",
        String::from_utf8_lossy(dispatcher.link().written())
    );
    println!("Measurements in {}", config.storage_dir.display());
}
