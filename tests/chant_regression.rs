use higi_studio::{
    chant::{base, emphasis},
    compose, CadenceMode, EchoCount, Session, SessionEvent, TempoBpm, WaveCycler,
};
use std::time::Duration;

#[test]
fn composes_reference_chants() {
    let cases = [
        (2, CadenceMode::Calm, "Hihi~"),
        (3, CadenceMode::Calm, "Hihigi~"),
        (4, CadenceMode::Excited, "Hihigihi!"),
        (5, CadenceMode::Excited, "Hihigihigi!!"),
        (6, CadenceMode::Chaotic, "HIHIGIHIGIHI!!!"),
        (8, CadenceMode::Excited, "Hihigihigihigihi!!!"),
        (12, CadenceMode::Excited, "Hihigihigihigihigihigihi!!!"),
    ];
    for (echoes, cadence, expected) in cases {
        assert_eq!(compose(EchoCount::new(echoes), cadence), expected, "{echoes} {cadence}");
    }
}

#[test]
fn every_chant_starts_with_head_and_has_two_chars_per_echo() {
    for echoes in EchoCount::all() {
        let base = base(echoes);
        assert!(base.starts_with("Hi"));
        assert_eq!(base.len(), echoes.get() * 2);
        for cadence in CadenceMode::ALL {
            let chant = compose(echoes, cadence);
            assert!(chant.to_lowercase().starts_with(&base.to_lowercase()));
        }
    }
}

#[test]
fn excited_emphasis_is_bounded_and_monotonic() {
    let mut previous = 0;
    for echoes in EchoCount::all() {
        let chant = compose(echoes, CadenceMode::Excited);
        let bangs = chant.chars().rev().take_while(|&c| c == '!').count();
        assert!((1..=3).contains(&bangs));
        assert_eq!(bangs, emphasis(echoes));
        assert!(bangs >= previous);
        previous = bangs;
    }
}

#[test]
fn compose_is_pure() {
    for echoes in EchoCount::all() {
        for cadence in CadenceMode::ALL {
            assert_eq!(compose(echoes, cadence), compose(echoes, cadence));
        }
    }
}

#[test]
fn out_of_range_inputs_clamp() {
    assert_eq!(compose(EchoCount::new(-5), CadenceMode::Calm), "Hihi~");
    assert_eq!(
        compose(EchoCount::new(1_000), CadenceMode::Chaotic),
        compose(EchoCount::MAX, CadenceMode::Chaotic)
    );
    assert_eq!(TempoBpm::new(10_000).period(), Duration::from_millis(180));
    assert_eq!(TempoBpm::new(-1).period(), Duration::from_millis(840));
}

#[test]
fn wave_cycle_at_120_bpm() {
    let mut cycler = WaveCycler::new(TempoBpm::new(120));
    assert_eq!(cycler.period(), Duration::from_millis(480));
    assert_eq!(cycler.advance(Duration::from_millis(480 * 3)), 3);
    assert_eq!(cycler.index().get(), 0);
}

#[test]
fn session_walkthrough() {
    let mut session = Session::new();
    session.apply(SessionEvent::SetEchoes(2));
    session.apply(SessionEvent::SelectCadence(CadenceMode::Calm));
    assert_eq!(session.chant(), "Hihi~");

    let update = session.apply(SessionEvent::SetTempo(150));
    assert!(update.retime);
    assert_eq!(session.wave().period(), Duration::from_millis(300));

    for _ in 0..2 {
        session.apply(SessionEvent::Tick);
    }
    assert_eq!(session.caption(), "Vibrant echo peaking.");
}

#[cfg(feature = "rtrb")]
#[test]
fn session_pumps_live_timer() {
    use higi_studio::timer::WaveTimer;

    let mut session = Session::new();
    let mut timer = WaveTimer::spawn(Duration::from_millis(5)).unwrap();
    std::thread::sleep(Duration::from_millis(100));
    assert!(session.pump(&mut timer).redraw);
    drop(timer);
}
