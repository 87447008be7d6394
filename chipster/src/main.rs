// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate chip8;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate rand;
extern crate sdl2;

mod beep;
mod keymap;
mod looper;
mod screen;

use std::io;

use chip8::{Chip8, ClockRegulator, Env};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use beep::TerminalBeeper;
use keymap::SdlKeypad;
use looper::Step;
use screen::SdlScreen;

error_chain! {
    links {
        Chip8(chip8::Error, chip8::ErrorKind);
    }

    foreign_links {
        Io(io::Error);
    }

    errors {
        Sdl(msg: String) {
            description("SDL error")
            display("SDL error: {}", msg)
        }
    }
}

struct CommandArgs {
    rom_file_name: String,
}

impl CommandArgs {
    fn parse() -> CommandArgs {
        use clap::{App, Arg};

        let matches = App::new("chipster")
            .about("CHIP-8 interpreter")
            .arg(
                Arg::with_name("ROM_FILE")
                    .help("rom file to load")
                    .required(true),
            )
            .get_matches();

        CommandArgs {
            rom_file_name: matches
                .value_of("ROM_FILE")
                .expect("ROM_FILE is required")
                .to_string(),
        }
    }
}

fn main() {
    use std::process::exit;

    env_logger::init();

    let args = CommandArgs::parse();
    match do_run(&args) {
        Ok(_) => exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.iter().skip(1) {
                eprintln!("  caused by: {}", cause);
            }
            exit(1);
        }
    }
}

fn do_run(args: &CommandArgs) -> Result<()> {
    let mut vm = Chip8::from_path(&args.rom_file_name)?;

    let sdl_ctx = sdl2::init().map_err(ErrorKind::Sdl)?;
    let video_ctx = sdl_ctx.video().map_err(ErrorKind::Sdl)?;
    let mut screen = SdlScreen::new(&video_ctx, "chipster")?;
    let mut events = sdl_ctx.event_pump().map_err(ErrorKind::Sdl)?;

    let mut beeper = TerminalBeeper::new(io::stdout());
    let mut rng = rand::thread_rng();
    let mut clock = ClockRegulator::default();

    info!("running {}", args.rom_file_name);

    looper::start_loop(|| {
        if !poll_events(&mut events) {
            return Ok(Step::Done);
        }

        if !clock.tick() {
            return Ok(Step::Idle);
        }

        let keypad = SdlKeypad::new(events.keyboard_state());
        vm.cycle(&mut Env {
            screen: &mut screen,
            keypad: &keypad,
            beeper: &mut beeper,
            rng: &mut rng,
        })?;

        Ok(Step::Cont)
    })?;

    info!("window closed, stopping");
    debug!("final state: {:?}", vm);

    Ok(())
}

/// Drains pending window events. Returns `false` once the user asked to quit.
fn poll_events(events: &mut EventPump) -> bool {
    for event in events.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => return false,
            _ => {}
        }
    }
    true
}
