mod tests {
    use corluma_protocol::custom_colors::DEFAULT_PATTERN;
    use corluma_protocol::{
        Command, DeviceConfig, DeviceState, Mode, PacketDecoder, PacketEncoder, Palette,
        RejectedReason, Rgb, Routine,
    };

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn default_state() -> DeviceState {
        DeviceState::new(DeviceConfig::default()).unwrap()
    }

    /// Encode on one side, decode and apply on the other
    fn apply_packet(state: &mut DeviceState, packet: &str) {
        let mut decoder = PacketDecoder::new(state.custom_capacity());
        decoder.feed(packet.as_bytes(), |decoded| {
            state.apply(&decoded.unwrap()).unwrap();
        });
    }

    #[test]
    fn test_defaults() {
        let state = default_state();
        assert_eq!(state.brightness(), 50);
        assert_eq!(state.speed(), 300);
        assert_eq!(state.idle_timeout(), 120);
        assert_eq!(state.mode(), Mode::Single(Routine::SingleSolid));
        assert_eq!(state.palette(), None);
        assert_eq!(state.main_color(), GREEN);
        assert_eq!(state.custom_capacity(), 10);
        assert_eq!(state.custom_used(), 10);
    }

    #[test]
    fn test_default_custom_pattern_is_tiled() {
        let state = default_state();
        let colors = state.custom_colors().all();
        assert_eq!(colors.len(), 10);
        for (index, color) in colors.iter().enumerate() {
            assert_eq!(*color, DEFAULT_PATTERN[index % 5]);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = default_state();
        state.apply(&Command::BrightnessChange(90)).unwrap();
        state.apply(&Command::SpeedChange(1200)).unwrap();
        state.apply(&Command::CustomColorCountChange(2)).unwrap();
        state
            .apply(&Command::CustomArrayColorChange {
                index: 0,
                color: Rgb::new(1, 2, 3),
            })
            .unwrap();
        state
            .apply(&Command::ModeChange(Mode::Multi(Routine::MultiGlimmer, Palette::Evil)))
            .unwrap();

        state.apply(&Command::ResetSettingsToDefaults).unwrap();
        let once = state.clone();
        state.apply(&Command::ResetSettingsToDefaults).unwrap();

        assert_eq!(state, once);
        assert_eq!(state, default_state());
    }

    #[test]
    fn test_count_above_capacity_is_rejected() {
        let mut state = default_state();
        let before = state.clone();
        assert_eq!(
            state.apply(&Command::CustomColorCountChange(11)),
            Err(RejectedReason::CountAboveCapacity {
                count: 11,
                capacity: 10
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_runtime_capacity_is_rechecked() {
        let mut state = default_state();
        state.set_capacity(4).unwrap();
        assert_eq!(state.custom_used(), 4);

        // Passes the static bound of a decoder built for the full storage
        let command = Command::CustomColorCountChange(6);
        assert_eq!(command.validate(10), Ok(()));
        assert_eq!(
            state.apply(&command),
            Err(RejectedReason::CountAboveCapacity {
                count: 6,
                capacity: 4
            })
        );
        assert_eq!(
            state.apply(&Command::CustomArrayColorChange {
                index: 4,
                color: Rgb::new(1, 1, 1)
            }),
            Err(RejectedReason::IndexAboveCapacity {
                index: 4,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_capacity_bounds() {
        let mut state = default_state();
        assert_eq!(
            state.set_capacity(0),
            Err(RejectedReason::CapacityOutOfRange {
                capacity: 0,
                max: 10
            })
        );
        assert_eq!(
            state.set_capacity(11),
            Err(RejectedReason::CapacityOutOfRange {
                capacity: 11,
                max: 10
            })
        );
        assert_eq!(state.custom_capacity(), 10);

        let config = DeviceConfig {
            custom_capacity: 12,
            ..DeviceConfig::default()
        };
        assert!(DeviceState::<10>::new(config).is_err());
        assert!(DeviceState::<16>::new(config).is_ok());
    }

    #[test]
    fn test_unused_entries_are_retained() {
        let mut state = default_state();
        state.apply(&Command::CustomColorCountChange(2)).unwrap();
        assert_eq!(state.custom_colors().active().len(), 2);
        assert_eq!(state.custom_colors().get(3), Some(DEFAULT_PATTERN[3]));

        state.set_capacity(3).unwrap();
        state.set_capacity(10).unwrap();
        state.apply(&Command::CustomColorCountChange(10)).unwrap();
        assert_eq!(state.custom_colors().get(7), Some(DEFAULT_PATTERN[2]));
    }

    #[test]
    fn test_rejected_brightness_leaves_state() {
        let mut state = default_state();
        let before = state.clone();
        assert!(state.apply(&Command::BrightnessChange(101)).is_err());
        assert!(state.apply(&Command::SpeedChange(0)).is_err());
        assert!(
            state
                .apply(&Command::ModeChange(Mode::Single(Routine::MultiFade)))
                .is_err()
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_mode_transitions() {
        let mut state = default_state();
        state
            .apply(&Command::ModeChange(Mode::Multi(Routine::MultiFade, Palette::Fire)))
            .unwrap();
        assert_eq!(state.routine(), Routine::MultiFade);
        assert_eq!(state.palette(), Some(Palette::Fire));

        state
            .apply(&Command::ModeChange(Mode::Single(Routine::SingleBlink)))
            .unwrap();
        assert_eq!(state.palette(), None);

        state.apply(&Command::ModeChange(Mode::Off)).unwrap();
        assert!(state.mode().is_off());
        assert_eq!(state.routine(), Routine::Off);
    }

    #[test]
    fn test_average_color() {
        let mut state = default_state();
        assert_eq!(
            state.average_color(Palette::Rgb),
            Ok(Rgb::new(85, 85, 85))
        );
        assert_eq!(
            state.average_color(Palette::Custom),
            Ok(Rgb::new(45, 76, 142))
        );

        state.apply(&Command::CustomColorCountChange(0)).unwrap();
        assert_eq!(
            state.average_color(Palette::Custom),
            Err(RejectedReason::EmptyPalette)
        );
        assert!(state.average_color(Palette::Fire).is_ok());
    }

    #[test]
    fn test_custom_average_end_to_end() {
        let encoder = PacketEncoder::default();
        let mut state = default_state();
        assert_eq!(state.brightness(), 50);
        assert_eq!(state.speed(), 300);
        assert_eq!(state.idle_timeout(), 120);

        apply_packet(&mut state, &encoder.encode_custom_color_count_change(4).unwrap());
        apply_packet(
            &mut state,
            &encoder.encode_custom_color_change(0, 255, 0, 0).unwrap(),
        );

        // red, violet, blue, dark green
        assert_eq!(
            state.average_color(Palette::Custom),
            Ok(Rgb::new(105, 31, 137))
        );
    }
}
