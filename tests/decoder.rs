mod tests {
    use corluma_protocol::routine::ROUTINE_MAX;
    use corluma_protocol::{
        Command, Decoded, MAX_BODY_LEN, Mode, PALETTE_MAX, PacketDecoder, PacketEncoder,
        PacketHeader, Palette, Parameter, ProtocolError, Rgb, Routine,
    };

    fn feed_all(decoder: &mut PacketDecoder, bytes: &[u8]) -> Vec<Decoded> {
        let mut decoded = Vec::new();
        decoder.feed(bytes, |packet| decoded.push(packet));
        decoded
    }

    /// Encode a command and decode it again on a fresh decoder
    fn assert_survives_encoding(encoder: &PacketEncoder, command: Command) {
        let packet = encoder.encode(&command).unwrap();
        let mut decoder = PacketDecoder::new(encoder.capacity());
        assert_eq!(
            feed_all(&mut decoder, packet.as_bytes()),
            vec![Ok(command)],
            "packet {packet}"
        );
    }

    fn channel_samples() -> Vec<u8> {
        (0..=255u8).step_by(15).chain([1, 128, 254]).collect()
    }

    #[test]
    fn test_stream_reassembly() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"3,50;3,7"),
            vec![Ok(Command::BrightnessChange(50))]
        );
        assert_eq!(decoder.pending(), b"3,7");
        assert_eq!(
            feed_all(&mut decoder, b"5;"),
            vec![Ok(Command::BrightnessChange(75))]
        );
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn test_unknown_header_does_not_abort() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"9,1;3,50;"),
            vec![
                Err(ProtocolError::UnknownHeader(9)),
                Ok(Command::BrightnessChange(50))
            ]
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"3,50,1;3;0,1,3;0,10;2,1,2,3,4,5;7,1;"),
            vec![
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::BrightnessChange,
                    expected: 1,
                    found: 2
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::BrightnessChange,
                    expected: 1,
                    found: 0
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ModeChange,
                    expected: 1,
                    found: 2
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ModeChange,
                    expected: 2,
                    found: 1
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::CustomArrayColorChange,
                    expected: 4,
                    found: 5
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ResetSettingsToDefaults,
                    expected: 0,
                    found: 1
                }),
            ]
        );
    }

    #[test]
    fn test_out_of_range_values() {
        let mut decoder = PacketDecoder::new(10);
        assert_eq!(
            feed_all(&mut decoder, b"3,101;3,-1;1,256,0,0;2,12,1,2,3;4,0;0,99;0,10,17;5,11;"),
            vec![
                Err(ProtocolError::InvalidParameter(Parameter::Brightness)),
                Err(ProtocolError::InvalidParameter(Parameter::Brightness)),
                Err(ProtocolError::InvalidParameter(Parameter::ColorChannel)),
                Err(ProtocolError::IndexOutOfRange {
                    index: 12,
                    capacity: 10
                }),
                Err(ProtocolError::InvalidParameter(Parameter::Speed)),
                Err(ProtocolError::InvalidParameter(Parameter::Routine)),
                Err(ProtocolError::InvalidParameter(Parameter::Palette)),
                Err(ProtocolError::InvalidParameter(Parameter::ColorCount)),
            ]
        );
    }

    #[test]
    fn test_malformed_fields() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"3,abc;x;3,,;\xff;6,5;"),
            vec![
                Err(ProtocolError::MalformedField),
                Err(ProtocolError::MalformedField),
                Err(ProtocolError::MalformedField),
                Err(ProtocolError::MalformedField),
                Ok(Command::IdleTimeoutChange(5)),
            ]
        );
    }

    #[test]
    fn test_whitespace_and_blank_packets() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"\r\n3, 50;\r\n;;  ;1,1,2,3;\n"),
            vec![
                Ok(Command::BrightnessChange(50)),
                Ok(Command::MainColorChange(Rgb::new(1, 2, 3)))
            ]
        );
    }

    #[test]
    fn test_overlong_packet_is_dropped_once() {
        let mut decoder = PacketDecoder::default();
        let mut bytes = vec![b'1'; 150];
        bytes.extend_from_slice(b";3,50;");
        assert_eq!(
            feed_all(&mut decoder, &bytes),
            vec![
                Err(ProtocolError::PacketTooLong),
                Ok(Command::BrightnessChange(50))
            ]
        );
    }

    #[test]
    fn test_byte_by_byte_feed() {
        let mut decoder = PacketDecoder::default();
        let mut decoded = Vec::new();
        for byte in b"0,10,6;2,1,10,20,30;" {
            decoder.feed(core::slice::from_ref(byte), |packet| decoded.push(packet));
        }
        assert_eq!(
            decoded,
            vec![
                Ok(Command::ModeChange(Mode::Multi(Routine::MultiFade, Palette::Fire))),
                Ok(Command::CustomArrayColorChange {
                    index: 1,
                    color: Rgb::new(10, 20, 30)
                }),
            ]
        );
    }

    #[test]
    fn test_every_header_survives_encoding() {
        let encoder = PacketEncoder::default();
        let commands = [
            Command::ModeChange(Mode::Off),
            Command::ModeChange(Mode::Single(Routine::SingleSawtoothFadeOut)),
            Command::ModeChange(Mode::Multi(Routine::MultiBarsMoving, Palette::All)),
            Command::MainColorChange(Rgb::new(0, 128, 255)),
            Command::CustomArrayColorChange {
                index: 9,
                color: Rgb::new(255, 255, 255),
            },
            Command::BrightnessChange(100),
            Command::SpeedChange(u32::MAX),
            Command::CustomColorCountChange(0),
            Command::IdleTimeoutChange(0),
            Command::ResetSettingsToDefaults,
            Command::StateUpdateRequest,
        ];

        let mut decoder = PacketDecoder::default();
        let mut stream = Vec::new();
        for command in &commands {
            stream.extend_from_slice(encoder.encode(command).unwrap().as_bytes());
        }
        let decoded = feed_all(&mut decoder, &stream);
        let expected: Vec<Decoded> = commands.iter().copied().map(Ok).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_every_mode_survives_encoding() {
        let encoder = PacketEncoder::default();
        for raw in 0..ROUTINE_MAX {
            let routine = Routine::from_raw(raw).unwrap();
            if routine.requires_palette() {
                for raw_palette in 0..PALETTE_MAX {
                    let palette = Palette::from_raw(raw_palette).unwrap();
                    let mode = Mode::new(routine, Some(palette)).unwrap();
                    assert_survives_encoding(&encoder, Command::ModeChange(mode));
                }
            } else {
                let mode = Mode::new(routine, None).unwrap();
                assert_survives_encoding(&encoder, Command::ModeChange(mode));
            }
        }
    }

    #[test]
    fn test_every_brightness_survives_encoding() {
        let encoder = PacketEncoder::default();
        for value in 0..=100 {
            assert_survives_encoding(&encoder, Command::BrightnessChange(value));
        }
    }

    #[test]
    fn test_every_count_and_index_survives_encoding() {
        for capacity in 1..=10 {
            let encoder = PacketEncoder::new(capacity);
            for count in 0..=capacity {
                assert_survives_encoding(&encoder, Command::CustomColorCountChange(count));
            }
            for index in 0..capacity {
                let color = Rgb::new(255, 0, 255);
                assert_survives_encoding(&encoder, Command::CustomArrayColorChange { index, color });
            }
        }
    }

    #[test]
    fn test_color_channels_survive_encoding() {
        let encoder = PacketEncoder::default();
        let channels = channel_samples();
        for &r in &channels {
            for &g in &channels {
                for &b in &channels {
                    let color = Rgb::new(r, g, b);
                    assert_survives_encoding(&encoder, Command::MainColorChange(color));
                }
            }
            let color = Rgb::new(r, 255 - r, 0);
            assert_survives_encoding(&encoder, Command::CustomArrayColorChange { index: 9, color });
        }
    }

    #[test]
    fn test_speed_and_timeout_bounds_survive_encoding() {
        let encoder = PacketEncoder::default();
        for value in (1..=1000).chain([65_535, u32::MAX - 1, u32::MAX]) {
            assert_survives_encoding(&encoder, Command::SpeedChange(value));
        }
        for minutes in (0..=1000).chain([65_535, u32::MAX - 1, u32::MAX]) {
            assert_survives_encoding(&encoder, Command::IdleTimeoutChange(minutes));
        }
    }

    #[test]
    fn test_overflowing_fields_report_routine_arity() {
        let mut decoder = PacketDecoder::default();
        assert_eq!(
            feed_all(&mut decoder, b"0,1,2,3,4,5;0,10,1,2,3,4;0,0,1,2,3,4;0,99,1,2,3,4;"),
            vec![
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ModeChange,
                    expected: 1,
                    found: 5
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ModeChange,
                    expected: 2,
                    found: 5
                }),
                Err(ProtocolError::ArityMismatch {
                    header: PacketHeader::ModeChange,
                    expected: 1,
                    found: 5
                }),
                Err(ProtocolError::InvalidParameter(Parameter::Routine)),
            ]
        );
    }

    #[test]
    fn test_body_length_limit_matches_packet_size() {
        let mut decoder = PacketDecoder::default();

        // Longest body a `Packet` can carry next to its terminator
        let mut longest = b"3,".to_vec();
        longest.resize(MAX_BODY_LEN - 2, b' ');
        longest.extend_from_slice(b"50;");
        assert_eq!(longest.len(), MAX_BODY_LEN + 1);
        assert_eq!(
            feed_all(&mut decoder, &longest),
            vec![Ok(Command::BrightnessChange(50))]
        );

        let mut too_long = b"3,".to_vec();
        too_long.resize(MAX_BODY_LEN - 1, b' ');
        too_long.extend_from_slice(b"50;3,60;");
        assert_eq!(
            feed_all(&mut decoder, &too_long),
            vec![
                Err(ProtocolError::PacketTooLong),
                Ok(Command::BrightnessChange(60))
            ]
        );
    }

    #[test]
    fn test_clear_drops_partial_packet() {
        let mut decoder = PacketDecoder::default();
        assert!(feed_all(&mut decoder, b"3,5").is_empty());
        assert_eq!(decoder.pending(), b"3,5");
        decoder.clear();
        assert!(decoder.pending().is_empty());
        assert_eq!(
            feed_all(&mut decoder, b"0,0;"),
            vec![Ok(Command::ModeChange(Mode::Off))]
        );

        // Also leaves the discarding state of an overlong packet
        let overlong = vec![b'1'; MAX_BODY_LEN + 1];
        assert_eq!(
            feed_all(&mut decoder, &overlong),
            vec![Err(ProtocolError::PacketTooLong)]
        );
        decoder.clear();
        assert_eq!(
            feed_all(&mut decoder, b"3,20;"),
            vec![Ok(Command::BrightnessChange(20))]
        );
    }
}
