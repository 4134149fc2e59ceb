//! Hierarchical traffic light.
//!
//! Red, Green, and Yellow are children of Operating. A fault from any phase
//! is handled once, on Operating, and a reset brings the light back to Red —
//! the phases themselves never mention faults at all.
//!
//! Run with: cargo run --example traffic_light

use substate::{signal_space, state_space, BuildError, Machine};

state_space! {
    enum Light {
        Operating,
        Red,
        Green,
        Yellow,
        Failed,
    }
}

signal_space! {
    enum Event {
        Advance,
        Fault,
        Reset,
    }
}

#[derive(Default)]
struct Junction {
    phase: Option<Light>,
    bulb_checks: u32,
}

fn main() -> Result<(), BuildError> {
    let mut hsm = Machine::<Junction, Light, Event>::new(Junction::default());

    hsm.define_state(Light::Operating)
        .no_parent()
        .on_enter(|_| println!("  junction powered up"))
        .on_exit(|_| println!("  junction powered down"))
        .on_tick(|j: &mut Junction| {
            j.bulb_checks += 1;
            println!("  [tick] bulbs inspected ({} so far)", j.bulb_checks);
        })
        .on_signal(Event::Fault)
        .go_to(Light::Failed);

    hsm.define_state(Light::Red)
        .parent(Light::Operating)?
        .on_enter(|_| println!("  RED — stop"))
        .on_signal(Event::Advance)
        .go_to(Light::Green);

    hsm.define_state(Light::Green)
        .parent(Light::Operating)?
        .on_enter(|_| println!("  GREEN — go"))
        .on_signal(Event::Advance)
        .go_to(Light::Yellow);

    hsm.define_state(Light::Yellow)
        .parent(Light::Operating)?
        .on_enter(|_| println!("  YELLOW — caution"))
        .on_signal(Event::Advance)
        .go_to(Light::Red);

    hsm.define_state(Light::Failed)
        .no_parent()
        .on_enter(|_| println!("  FLASHING — all phases dark"))
        .on_signal(Event::Reset)
        .go_to(Light::Red);

    hsm.conclude_setup_with(Light::Red, |j, light| {
        j.phase = Some(light);
        println!("phase committed: {light:?}");
    });

    println!("\ncycling through the phases:");
    hsm.signal(Event::Advance);
    hsm.signal(Event::Advance);
    hsm.signal(Event::Advance);

    println!("\nperiodic maintenance reaches Operating from any phase:");
    hsm.tick();
    hsm.tick();

    println!("\na fault is caught by Operating, wherever the light is:");
    hsm.signal(Event::Advance);
    hsm.signal(Event::Fault);

    println!("\nand a reset restores service:");
    hsm.signal(Event::Reset);

    println!(
        "\nresting phase: {:?} after {} bulb checks",
        hsm.actor().phase,
        hsm.actor().bulb_checks
    );
    Ok(())
}
