//! Scenario tests driving full machines the way an embedding actor would.

use substate::{signal_space, state_space, BuildError, Machine, StateSpace};

state_space! {
    enum Region {
        Whole,
        North,
        South,
        East,
        NorthWest,
        NorthNorthWest,
    }
}

signal_space! {
    enum Compass {
        GoNorth,
        GoSouth,
        GoEast,
        GoWest,
        DoAction,
    }
}

#[derive(Default)]
struct Controller {
    state: Option<Region>,
    entered: [u32; Region::COUNT],
    ticked: [u32; Region::COUNT],
    exited: [u32; Region::COUNT],
    action_count: u32,
    east_blocked: bool,
}

impl Controller {
    fn east_open(&self) -> bool {
        !self.east_blocked
    }

    fn do_action(&mut self) {
        self.action_count += 1;
    }

    fn at(&self) -> Region {
        self.state.expect("no state committed yet")
    }
}

fn mark_enter(region: Region) -> impl Fn(&mut Controller) {
    move |c| c.entered[region.ordinal()] += 1
}

fn mark_tick(region: Region) -> impl Fn(&mut Controller) {
    move |c| c.ticked[region.ordinal()] += 1
}

fn mark_exit(region: Region) -> impl Fn(&mut Controller) {
    move |c| c.exited[region.ordinal()] += 1
}

/// Whole > {South, North}, North > NorthWest > NorthNorthWest; East is left
/// undefined on purpose. Starts in South.
fn compass() -> Machine<Controller, Region, Compass> {
    let mut hsm = Machine::new(Controller::default());

    hsm.define_state(Region::Whole)
        .no_parent()
        .on_enter(mark_enter(Region::Whole))
        .on_tick(mark_tick(Region::Whole))
        .on_exit(mark_exit(Region::Whole));

    hsm.define_state(Region::North)
        .parent(Region::Whole)
        .unwrap()
        .on_enter(mark_enter(Region::North))
        .on_tick(mark_tick(Region::North))
        .on_exit(mark_exit(Region::North))
        .on_signal(Compass::GoWest)
        .go_to(Region::NorthWest)
        .on_signal(Compass::DoAction)
        .act(Controller::do_action);

    hsm.define_state(Region::South)
        .parent(Region::Whole)
        .unwrap()
        .on_enter(mark_enter(Region::South))
        .on_tick(mark_tick(Region::South))
        .on_exit(mark_exit(Region::South))
        .on_signal(Compass::GoNorth)
        .go_to(Region::North)
        .on_signal(Compass::GoEast)
        .go_to_if(Region::East, Controller::east_open)
        .on_signal(Compass::GoEast)
        .act(Controller::do_action);

    hsm.define_state(Region::NorthWest)
        .parent(Region::North)
        .unwrap()
        .on_enter(mark_enter(Region::NorthWest))
        .on_tick(mark_tick(Region::NorthWest))
        .on_exit(mark_exit(Region::NorthWest))
        .on_signal(Compass::GoNorth)
        .go_to(Region::NorthNorthWest);

    hsm.define_state(Region::NorthNorthWest)
        .parent(Region::NorthWest)
        .unwrap()
        .on_enter(mark_enter(Region::NorthNorthWest))
        .on_exit(mark_exit(Region::NorthNorthWest))
        .on_signal(Compass::GoSouth)
        .go_to(Region::South);

    hsm.conclude_setup_with(Region::South, |c, region| c.state = Some(region));
    hsm
}

#[test]
fn setup_enters_states_down_to_the_starting_substate() {
    let hsm = compass();
    let c = hsm.actor();
    assert_eq!(c.at(), Region::South);
    assert_eq!(c.entered[Region::Whole.ordinal()], 1);
    assert_eq!(c.entered[Region::South.ordinal()], 1);
    assert_eq!(c.entered[Region::North.ordinal()], 0);
}

#[test]
fn tick_reaches_the_active_state() {
    let mut hsm = compass();
    hsm.tick();
    assert_eq!(hsm.actor().ticked[Region::South.ordinal()], 1);
    hsm.tick();
    assert_eq!(hsm.actor().ticked[Region::South.ordinal()], 2);
}

#[test]
fn transition_fires_exit_and_enter_hooks() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    let c = hsm.actor();
    assert_eq!(c.at(), Region::North);
    assert_eq!(c.exited[Region::Whole.ordinal()], 0);
    assert_eq!(c.exited[Region::South.ordinal()], 1);
    assert_eq!(c.entered[Region::North.ordinal()], 1);
}

#[test]
fn transition_descends_into_a_deeper_substate() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    assert_eq!(hsm.actor().at(), Region::NorthWest);
}

#[test]
fn transition_reaches_a_third_level() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    hsm.signal(Compass::GoNorth);
    assert_eq!(hsm.actor().at(), Region::NorthNorthWest);
}

#[test]
fn common_ancestor_bounds_the_cascades() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    // Descending within the branch exits nothing above the destination.
    assert_eq!(hsm.actor().exited[Region::North.ordinal()], 0);
    hsm.signal(Compass::GoNorth);
    assert_eq!(hsm.actor().exited[Region::NorthWest.ordinal()], 0);

    hsm.signal(Compass::GoSouth);
    let c = hsm.actor();
    assert_eq!(c.at(), Region::South);
    assert_eq!(c.exited[Region::Whole.ordinal()], 0);
    assert_eq!(c.exited[Region::North.ordinal()], 1);
    assert_eq!(c.exited[Region::NorthWest.ordinal()], 1);
    assert_eq!(c.exited[Region::NorthNorthWest.ordinal()], 1);
    assert_eq!(c.entered[Region::South.ordinal()], 2);
}

#[test]
fn action_signal_runs_the_bound_action() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    assert_eq!(hsm.actor().action_count, 0);
    hsm.signal(Compass::DoAction);
    assert_eq!(hsm.actor().action_count, 1);
}

#[test]
fn signals_climb_to_an_ancestor_that_handles_them() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    hsm.signal(Compass::GoNorth);
    assert_eq!(hsm.actor().at(), Region::NorthNorthWest);

    // NorthNorthWest has no GoWest handler; North does.
    hsm.signal(Compass::GoWest);
    assert_eq!(hsm.actor().at(), Region::NorthWest);
}

#[test]
fn actions_climb_to_an_ancestor_too() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    hsm.signal(Compass::GoNorth);

    hsm.signal(Compass::DoAction);
    assert_eq!(hsm.actor().action_count, 1);
}

#[test]
fn ticks_climb_to_the_nearest_hooked_ancestor() {
    let mut hsm = compass();
    hsm.signal(Compass::GoNorth);
    hsm.signal(Compass::GoWest);
    hsm.signal(Compass::GoNorth);

    hsm.tick();
    let c = hsm.actor();
    assert_eq!(c.ticked[Region::NorthWest.ordinal()], 1);
    assert_eq!(c.ticked[Region::North.ordinal()], 0);
    assert_eq!(c.ticked[Region::Whole.ordinal()], 0);
}

#[test]
fn action_and_transition_both_fire_for_one_signal() {
    let mut hsm = compass();
    hsm.signal(Compass::GoEast);
    let c = hsm.actor();
    assert_eq!(c.action_count, 1);
    assert_eq!(c.at(), Region::East);
}

#[test]
fn blocked_guard_keeps_the_state_but_runs_the_action() {
    let mut hsm = compass();
    hsm.actor_mut().east_blocked = true;
    hsm.signal(Compass::GoEast);
    let c = hsm.actor();
    assert_eq!(c.action_count, 1);
    assert_eq!(c.at(), Region::South);
}

#[test]
fn blocked_guard_fires_no_lifecycle_hooks() {
    let mut hsm = compass();
    hsm.actor_mut().east_blocked = true;
    hsm.signal(Compass::GoEast);
    let c = hsm.actor();
    assert_eq!(c.exited[Region::South.ordinal()], 0);
    assert_eq!(c.entered[Region::South.ordinal()], 1);
    assert_eq!(c.entered[Region::East.ordinal()], 0);
}

#[test]
fn blocked_guard_does_not_elevate_the_signal() {
    // The root has its own GoEast reaction; the guarded child must still
    // shadow it.
    let mut hsm = Machine::<Controller, Region, Compass>::new(Controller::default());
    hsm.define_state(Region::Whole)
        .no_parent()
        .on_signal(Compass::GoEast)
        .go_to(Region::North);
    hsm.define_state(Region::North).parent(Region::Whole).unwrap();
    hsm.define_state(Region::South)
        .parent(Region::Whole)
        .unwrap()
        .on_signal(Compass::GoEast)
        .go_to_if(Region::East, Controller::east_open);
    hsm.conclude_setup_with(Region::South, |c, region| c.state = Some(region));

    hsm.actor_mut().east_blocked = true;
    hsm.signal(Compass::GoEast);
    assert_eq!(hsm.actor().at(), Region::South);
}

#[test]
fn unhandled_signal_is_dropped() {
    let mut hsm = compass();
    hsm.signal(Compass::GoWest); // nothing on South, Whole, or between
    let c = hsm.actor();
    assert_eq!(c.at(), Region::South);
    assert_eq!(c.exited[Region::South.ordinal()], 0);
}

state_space! {
    enum Forest {
        BirchTrunk,
        BirchLeft,
        BirchRight,
        PineTrunk,
        PineLeft,
        PineRight,
    }
}

signal_space! {
    enum Woodland {
        GoUp,
        GoDownLeft,
        GoDownRight,
        GoJump,
        DoSing,
    }
}

#[derive(Default)]
struct Keeper {
    at: Option<Forest>,
    sung: bool,
    ticks: u32,
    pine_trunk_exits: u32,
}

/// Two disjoint trees: a birch and a pine, each with two branches.
fn forest() -> Result<Machine<Keeper, Forest, Woodland>, BuildError> {
    let mut hsm = Machine::new(Keeper::default());

    hsm.define_state(Forest::BirchTrunk)
        .no_parent()
        .on_signal(Woodland::GoDownLeft)
        .go_to(Forest::BirchLeft)
        .on_signal(Woodland::GoDownRight)
        .go_to(Forest::BirchRight);

    hsm.define_state(Forest::PineTrunk)
        .no_parent()
        .on_tick(|k: &mut Keeper| k.ticks += 1)
        .on_exit(|k: &mut Keeper| k.pine_trunk_exits += 1)
        .on_signal(Woodland::GoDownLeft)
        .go_to(Forest::PineLeft)
        .on_signal(Woodland::GoDownRight)
        .go_to(Forest::PineRight);

    hsm.define_state(Forest::PineLeft)
        .parent(Forest::PineTrunk)?
        .on_signal(Woodland::GoUp)
        .go_to(Forest::PineTrunk)
        .on_signal(Woodland::GoJump)
        .go_to(Forest::BirchLeft);

    hsm.define_state(Forest::PineRight)
        .parent(Forest::PineTrunk)?
        .on_signal(Woodland::GoUp)
        .go_to(Forest::PineTrunk)
        .on_signal(Woodland::GoJump)
        .go_to(Forest::BirchRight);

    hsm.define_state(Forest::BirchLeft)
        .parent(Forest::BirchTrunk)?
        .on_signal(Woodland::GoUp)
        .go_to(Forest::BirchTrunk)
        .on_signal(Woodland::GoJump)
        .go_to(Forest::PineRight)
        .on_signal(Woodland::DoSing)
        .act(|k: &mut Keeper| k.sung = true);

    hsm.define_state(Forest::BirchRight)
        .parent(Forest::BirchTrunk)?
        .on_signal(Woodland::GoUp)
        .go_to(Forest::BirchTrunk)
        .on_signal(Woodland::GoJump)
        .go_to(Forest::PineLeft);

    hsm.conclude_setup_with(Forest::PineTrunk, |k, tree| k.at = Some(tree));
    Ok(hsm)
}

#[test]
fn forest_descends_within_one_tree() {
    let mut hsm = forest().unwrap();
    assert_eq!(hsm.actor().at, Some(Forest::PineTrunk));

    hsm.signal(Woodland::GoDownLeft);
    assert_eq!(hsm.actor().at, Some(Forest::PineLeft));
}

#[test]
fn forest_jump_crosses_between_trees() {
    let mut hsm = forest().unwrap();
    hsm.signal(Woodland::GoDownLeft);
    hsm.signal(Woodland::GoJump);
    let k = hsm.actor();
    assert_eq!(k.at, Some(Forest::BirchLeft));
    // Unrelated trees share no ancestor, so the whole pine branch exits.
    assert_eq!(k.pine_trunk_exits, 1);
}

#[test]
fn forest_action_runs_after_the_jump() {
    let mut hsm = forest().unwrap();
    hsm.signal(Woodland::GoDownLeft);
    hsm.signal(Woodland::GoJump);
    hsm.signal(Woodland::DoSing);
    assert!(hsm.actor().sung);
}

#[test]
fn forest_tick_runs_at_the_trunk() {
    let mut hsm = forest().unwrap();
    hsm.tick();
    assert_eq!(hsm.actor().ticks, 1);
}

state_space! {
    enum Pair {
        Here,
        There,
    }
}

signal_space! {
    enum Step {
        Hop,
    }
}

trait Greeter {
    fn greet(&mut self);
}

#[derive(Default)]
struct Plain {
    greeted: u32,
}

impl Greeter for Plain {
    fn greet(&mut self) {
        self.greeted += 1;
    }
}

#[derive(Default)]
struct Loud {
    volume: u32,
}

impl Greeter for Loud {
    fn greet(&mut self) {
        self.volume += 10;
    }
}

/// One configuration, any actor implementing the trait: the machine picks up
/// each actor's own behavior without reconfiguration.
fn greeting_machine<A: Greeter + 'static>(actor: A) -> Machine<A, Pair, Step> {
    let mut hsm = Machine::new(actor);
    hsm.define_state(Pair::Here)
        .no_parent()
        .on_signal(Step::Hop)
        .go_to(Pair::There);
    hsm.define_state(Pair::There)
        .no_parent()
        .on_enter(|a: &mut A| a.greet());
    hsm.conclude_setup(Pair::Here);
    hsm
}

#[test]
fn hooks_dispatch_through_the_actors_own_trait_impl() {
    let mut plain = greeting_machine(Plain::default());
    plain.signal(Step::Hop);
    assert_eq!(plain.actor().greeted, 1);

    let mut loud = greeting_machine(Loud::default());
    loud.signal(Step::Hop);
    assert_eq!(loud.actor().volume, 10);
}

state_space! {
    enum Trio {
        Top,
        Left,
        Right,
    }
}

signal_space! {
    enum Shift {
        ToLeft,
        ToRight,
    }
}

#[derive(Default)]
struct Tracer {
    trail: Vec<&'static str>,
}

fn note(event: &'static str) -> impl Fn(&mut Tracer) {
    move |t| t.trail.push(event)
}

#[test]
fn definition_order_does_not_change_behavior() {
    // Parents declared before any handler references them.
    let mut forward = Machine::<Tracer, Trio, Shift>::new(Tracer::default());
    forward
        .define_state(Trio::Top)
        .no_parent()
        .on_enter(note("enter:Top"))
        .on_exit(note("exit:Top"));
    forward
        .define_state(Trio::Left)
        .parent(Trio::Top)
        .unwrap()
        .on_enter(note("enter:Left"))
        .on_exit(note("exit:Left"))
        .on_signal(Shift::ToRight)
        .go_to(Trio::Right);
    forward
        .define_state(Trio::Right)
        .parent(Trio::Top)
        .unwrap()
        .on_enter(note("enter:Right"))
        .on_exit(note("exit:Right"))
        .on_signal(Shift::ToLeft)
        .go_to(Trio::Left);
    forward.conclude_setup(Trio::Left);

    // Handlers declared while their destinations' parents are still unknown.
    let mut reversed = Machine::<Tracer, Trio, Shift>::new(Tracer::default());
    reversed
        .define_state(Trio::Right)
        .parent(Trio::Top)
        .unwrap()
        .on_enter(note("enter:Right"))
        .on_exit(note("exit:Right"))
        .on_signal(Shift::ToLeft)
        .go_to(Trio::Left);
    reversed
        .define_state(Trio::Left)
        .parent(Trio::Top)
        .unwrap()
        .on_enter(note("enter:Left"))
        .on_exit(note("exit:Left"))
        .on_signal(Shift::ToRight)
        .go_to(Trio::Right);
    reversed
        .define_state(Trio::Top)
        .no_parent()
        .on_enter(note("enter:Top"))
        .on_exit(note("exit:Top"));
    reversed.conclude_setup(Trio::Left);

    for hsm in [&mut forward, &mut reversed] {
        hsm.signal(Shift::ToRight);
        hsm.signal(Shift::ToLeft);
    }

    assert_eq!(forward.actor().trail, reversed.actor().trail);
    assert_eq!(
        forward.actor().trail,
        vec![
            "enter:Top",
            "enter:Left",
            "exit:Left",
            "enter:Right",
            "exit:Right",
            "enter:Left",
        ]
    );
}
