//! End-to-end runs over the frame codec, the cipher, and move
//! recovery, checked against states computed by `cube_core`.

use cube_core::{Cube, Cubies, MoveSeries};
use gan_protocol::{decode, Event, GanCipher, MoveStream, FRAME_LEN, GAN_GEN2_IV, GAN_GEN2_KEY};

fn put_bits(frame: &mut [u8], bit_offset: usize, bit_count: usize, value: u32) {
    for i in 0..bit_count {
        let bit = value >> (bit_count - 1 - i) & 1;
        let offset = bit_offset + i;
        if bit == 1 {
            frame[offset / 8] |= 1 << (7 - offset % 8);
        }
    }
}

/// Pack cubie arrays the way the cube transmits them, leaving out the
/// derived last element of each array.
fn facelets_frame(serial: u8, cubies: &Cubies) -> [u8; FRAME_LEN] {
    let mut frame = [0_u8; FRAME_LEN];
    put_bits(&mut frame, 0, 4, 0x04);
    put_bits(&mut frame, 4, 8, u32::from(serial));
    for i in 0..7 {
        put_bits(&mut frame, 12 + i * 3, 3, u32::from(cubies.cp[i]));
        put_bits(&mut frame, 33 + i * 2, 2, u32::from(cubies.co[i]));
    }
    for i in 0..11 {
        put_bits(&mut frame, 47 + i * 4, 4, u32::from(cubies.ep[i]));
        put_bits(&mut frame, 91 + i, 1, u32::from(cubies.eo[i]));
    }
    frame
}

fn move_frame(serial: u8, newest_first: &[(u8, bool)]) -> [u8; FRAME_LEN] {
    let mut frame = [0_u8; FRAME_LEN];
    put_bits(&mut frame, 0, 4, 0x02);
    put_bits(&mut frame, 4, 8, u32::from(serial));
    for i in 0..7 {
        match newest_first.get(i) {
            Some(&(face, prime)) => {
                put_bits(&mut frame, 12 + 5 * i, 4, u32::from(face));
                put_bits(&mut frame, 16 + 5 * i, 1, u32::from(prime));
            }
            None => put_bits(&mut frame, 12 + 5 * i, 4, 0xF),
        }
    }
    frame
}

#[test_log::test]
fn facelets_frame_reports_the_turned_cube() {
    // the cube's own encoding of its state after F then R
    let reported = Cubies {
        cp: [0, 5, 2, 1, 7, 4, 6, 3],
        co: [1, 2, 0, 2, 1, 1, 0, 2],
        ep: [1, 9, 2, 3, 11, 8, 6, 7, 4, 5, 10, 0],
        eo: [1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    };
    let frame = facelets_frame(2, &reported);

    let Ok(Some(Event::Facelets(state))) = decode(&frame) else {
        panic!("expected a facelets frame");
    };
    assert_eq!(state.serial, 2);
    assert_eq!(state.cubies, reported);
    assert_eq!(
        state.cube().unwrap(),
        Cube::from_moves(&"F R".parse::<MoveSeries>().unwrap())
    );
}

#[test_log::test]
fn derived_elements_restore_the_untransmitted_cubies() {
    let scrambled = Cube::from_moves(&"U F R2 B' D2 L".parse::<MoveSeries>().unwrap());
    let frame = facelets_frame(6, &scrambled.cubies());

    let Ok(Some(Event::Facelets(state))) = decode(&frame) else {
        panic!("expected a facelets frame");
    };
    assert_eq!(state.cubies, scrambled.cubies());
    assert_eq!(state.cube().unwrap(), scrambled);
}

#[test_log::test]
fn encrypted_frames_round_trip_through_the_cipher() {
    let mac = [0x7A, 0x78, 0x41, 0x8A, 0x9A, 0x8E];
    let cipher = GanCipher::new(&GAN_GEN2_KEY, &GAN_GEN2_IV, &mac);

    let mut wire = facelets_frame(0, &Cube::solved().cubies()).to_vec();
    cipher.encrypt(&mut wire).unwrap();
    assert_ne!(&wire[..], &facelets_frame(0, &Cube::solved().cubies())[..]);
    cipher.decrypt(&mut wire).unwrap();

    let Ok(Some(Event::Facelets(state))) = decode(&wire) else {
        panic!("expected a facelets frame");
    };
    assert!(state.cube().unwrap().is_solved());
}

#[test_log::test]
fn recovered_move_stream_tracks_the_physical_cube() {
    // U R F' performed on the cube; the R notification is dropped
    let mut stream = MoveStream::new();
    let mut cube = Cube::solved();

    let frames = [
        move_frame(1, &[(0, false)]),
        move_frame(3, &[(2, true), (1, false), (0, false)]),
    ];
    for raw in &frames {
        let Ok(Some(Event::Move(frame))) = decode(raw) else {
            panic!("expected a move frame");
        };
        for mv in stream.feed(&frame) {
            cube.apply(mv);
        }
    }

    assert_eq!(
        cube,
        Cube::from_moves(&"U R F'".parse::<MoveSeries>().unwrap())
    );
}
