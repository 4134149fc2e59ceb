//! Rover mission control over a compass hierarchy.
//!
//! The rover roams a survey field whose regions nest: moving between sibling
//! regions never re-enters the field itself, and shared chores (like taking
//! photos) are declared once on the field and inherited everywhere. The
//! crater to the east is only reachable while its bridge is intact.
//!
//! Run with: cargo run --example compass_rover

use substate::{signal_space, state_space, BuildError, Machine};

state_space! {
    enum Zone {
        Field,
        Base,
        Ridge,
        RidgeWest,
        Crater,
    }
}

signal_space! {
    enum Order {
        HeadNorth,
        HeadWest,
        HeadEast,
        HeadHome,
        Photograph,
    }
}

#[derive(Default)]
struct Rover {
    at: Option<Zone>,
    photos: u32,
    bridge_out: bool,
}

impl Rover {
    fn bridge_intact(&self) -> bool {
        !self.bridge_out
    }

    fn take_photo(&mut self) {
        self.photos += 1;
        println!("  *click* photo #{}", self.photos);
    }
}

fn mission(rover: Rover) -> Result<Machine<Rover, Zone, Order>, BuildError> {
    let mut hsm = Machine::new(rover);

    hsm.define_state(Zone::Field)
        .no_parent()
        .on_enter(|_| println!("  entering the survey field"))
        .on_exit(|_| println!("  leaving the survey field"))
        .on_signal(Order::Photograph)
        .act(Rover::take_photo);

    hsm.define_state(Zone::Base)
        .parent(Zone::Field)?
        .on_enter(|_| println!("  docked at base"))
        .on_exit(|_| println!("  rolling out of base"))
        .on_signal(Order::HeadNorth)
        .go_to(Zone::Ridge)
        .on_signal(Order::HeadEast)
        .go_to_if(Zone::Crater, Rover::bridge_intact);

    hsm.define_state(Zone::Ridge)
        .parent(Zone::Field)?
        .on_enter(|_| println!("  climbing the ridge"))
        .on_exit(|_| println!("  descending the ridge"))
        .on_signal(Order::HeadWest)
        .go_to(Zone::RidgeWest)
        .on_signal(Order::HeadHome)
        .go_to(Zone::Base);

    hsm.define_state(Zone::RidgeWest)
        .parent(Zone::Ridge)?
        .on_enter(|_| println!("  on the western spur"))
        .on_exit(|_| println!("  off the western spur"))
        .on_signal(Order::HeadHome)
        .go_to(Zone::Base);

    hsm.define_state(Zone::Crater)
        .parent(Zone::Field)?
        .on_enter(|_| println!("  at the crater rim"))
        .on_exit(|_| println!("  backing away from the crater"))
        .on_signal(Order::HeadHome)
        .go_to(Zone::Base);

    hsm.conclude_setup_with(Zone::Base, |r, zone| {
        r.at = Some(zone);
        println!("position committed: {zone:?}");
    });
    Ok(hsm)
}

fn main() -> Result<(), BuildError> {
    let mut hsm = mission(Rover::default())?;

    println!("\nnorth to the ridge, then out along the spur:");
    hsm.signal(Order::HeadNorth);
    hsm.signal(Order::HeadWest);

    println!("\nphotos are a field-wide chore, inherited by every zone:");
    hsm.signal(Order::Photograph);

    println!("\nheading home exits the spur and the ridge, not the field:");
    hsm.signal(Order::HeadHome);

    println!("\nthe bridge is out, so the crater stays off-limits:");
    hsm.actor_mut().bridge_out = true;
    hsm.signal(Order::HeadEast);

    println!("\nafter repairs the same order goes through:");
    hsm.actor_mut().bridge_out = false;
    hsm.signal(Order::HeadEast);

    println!(
        "\nmission summary: {} photo(s) taken, rover at {:?}",
        hsm.actor().photos,
        hsm.actor().at
    );
    Ok(())
}
