mod tests {
    use bee_lights::{
        BEE_SHOW, Brightness, FlashRate, LedPattern, LightShow, Programme, Restart, Step,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Show(LedPattern, Brightness, Brightness),
        Wait(u8),
    }

    /// Records calls; the wait numbered `cancel_at` reports a button press
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        cancel_at: Option<usize>,
        waits: usize,
    }

    impl LightShow for Recorder {
        fn show_each(&mut self, pattern: LedPattern, first: Brightness, second: Brightness) {
            self.calls.push(Call::Show(pattern, first, second));
        }

        fn wait(&mut self, deciseconds: u8) -> Result<(), Restart> {
            self.waits += 1;
            self.calls.push(Call::Wait(deciseconds));
            if self.cancel_at == Some(self.waits) {
                return Err(Restart);
            }
            Ok(())
        }
    }

    #[test]
    fn test_play_in_order() {
        const STEPS: &[Step] = &[
            Step::show(LedPattern::Eyes),
            Step::Wait(10),
            Step::show_each(
                LedPattern::EyesSting,
                Brightness::flash(FlashRate::Slow),
                Brightness::flash(FlashRate::Fast),
            ),
            Step::Wait(20),
        ];
        let mut recorder = Recorder::default();
        assert_eq!(Programme::new(STEPS).play(&mut recorder), Ok(()));
        assert_eq!(
            recorder.calls,
            vec![
                Call::Show(LedPattern::Eyes, Brightness::FULL, Brightness::FULL),
                Call::Wait(10),
                Call::Show(
                    LedPattern::EyesSting,
                    Brightness::flash(FlashRate::Slow),
                    Brightness::flash(FlashRate::Fast)
                ),
                Call::Wait(20),
            ]
        );
    }

    #[test]
    fn test_cancelled_wait_stops_playback() {
        let mut recorder = Recorder {
            cancel_at: Some(2),
            ..Recorder::default()
        };
        assert_eq!(BEE_SHOW.play(&mut recorder), Err(Restart));
        assert_eq!(recorder.calls.len(), 4);
        assert_eq!(recorder.calls.last(), Some(&Call::Wait(30)));
    }

    #[test]
    fn test_bee_show_shape() {
        assert_eq!(BEE_SHOW.steps().len(), 42);
        assert_eq!(BEE_SHOW.duration_deciseconds(), 325);
        assert_eq!(BEE_SHOW.steps()[0], Step::show(LedPattern::Eyes));
        assert_eq!(
            BEE_SHOW.steps()[6],
            Step::show_level(
                LedPattern::Antennae,
                Brightness::flash_antiphase(FlashRate::Slow)
            )
        );
    }
}
