use std::{env, fs};
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use gesture::{Float, FrameOutcome, GestureRecognizer, HandPose, MatcherParameters, Mode};

#[derive(Debug, Deserialize)]
struct Capture {
    name: String,
    landmarks: Vec<[Float; 3]>
}

#[derive(Debug, Deserialize)]
struct Session {
    #[serde(default)]
    parameters: MatcherParameters,
    captures: Vec<Capture>,
    #[serde(default)]
    frames: Vec<Option<Vec<[Float; 3]>>>
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "demos/session.yaml".to_string());
    let session_as_string = fs::read_to_string(&path).wrap_err_with(|| format!("reading session {}", path))?;
    let session: Session = serde_yaml::from_str(&session_as_string)?;
    let parameters = session.parameters.validate()?;
    println!("matcher: {}", parameters);

    let mut recognizer = GestureRecognizer::new(parameters);
    for capture in session.captures.iter() {
        let pose = HandPose::from_points(&capture.landmarks)?;
        match recognizer.capture(&capture.name, Some(&pose)) {
            Ok(name) => println!("Captured gesture: {}", name),
            Err(e) => println!("Error: {}", e)
        }
    }

    recognizer.set_mode(Mode::Inference)?;
    for (i, frame) in session.frames.iter().enumerate() {
        let pose = frame.as_ref().map(|points| HandPose::from_points(points)).transpose()?;
        match recognizer.process_frame(pose.as_ref()) {
            FrameOutcome::Detected(m) => println!("frame {}: Detected Gesture: {}", i, m),
            FrameOutcome::NoHand => println!("frame {}: No hand detected", i),
            FrameOutcome::Idle => println!("frame {}: idle", i)
        }
    }

    Ok(())
}
