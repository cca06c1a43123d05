//! SDL2 frontend: window, framebuffer blit, keyboard input, frame pacing.

use std::path::Path;
use std::time::{Duration, Instant};
use std::{env, fs, process, thread};

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use mochi::joypad::Button;
use mochi::machine::FRAME_RATE;
use mochi::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use mochi::{EmuError, Machine};

const SCALE: u32 = 3;
const WINDOW_WIDTH: u32 = SCREEN_WIDTH as u32 * SCALE;
const WINDOW_HEIGHT: u32 = SCREEN_HEIGHT as u32 * SCALE;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        process::exit(2);
    }
    let rom_path = Path::new(&args[1]);

    let machine = match load_machine(rom_path) {
        Ok(machine) => machine,
        Err(err) => {
            error!("{}: {err}", rom_path.display());
            process::exit(1);
        }
    };

    match run(machine, rom_path) {
        Ok(()) => info!("clean shutdown"),
        Err(err) => {
            error!("emulation stopped: {err}");
            process::exit(1);
        }
    }
}

fn load_machine(rom_path: &Path) -> Result<Machine, EmuError> {
    let rom = fs::read(rom_path).map_err(|e| EmuError::RomLoad {
        reason: e.to_string(),
    })?;
    info!("loaded {} ({} bytes)", rom_path.display(), rom.len());
    Machine::new(&rom)
}

fn run(mut machine: Machine, rom_path: &Path) -> Result<(), String> {
    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let title = format!(
        "mochi - {}",
        rom_path.file_name().unwrap_or_default().to_string_lossy()
    );
    let window = video
        .window(&title, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(
            PixelFormatEnum::RGB24,
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
        )
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl.event_pump()?;

    let frame_duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

    'running: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(button) = map_key(key) {
                        machine.press_button(button);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(button) = map_key(key) {
                        machine.release_button(button);
                    }
                }
                _ => {}
            }
        }

        machine.run_frame().map_err(|e| e.to_string())?;

        texture
            .update(None, machine.frame_buffer(), SCREEN_WIDTH * 3)
            .map_err(|e| e.to_string())?;
        canvas.clear();
        canvas.copy(
            &texture,
            None,
            Some(Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)),
        )?;
        canvas.present();

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }

    Ok(())
}

fn map_key(key: Keycode) -> Option<Button> {
    match key {
        Keycode::Right => Some(Button::Right),
        Keycode::Left => Some(Button::Left),
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::Z => Some(Button::A),
        Keycode::X => Some(Button::B),
        Keycode::Backspace => Some(Button::Select),
        Keycode::Return => Some(Button::Start),
        _ => None,
    }
}
