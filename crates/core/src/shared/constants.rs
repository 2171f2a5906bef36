pub const FACE_LANDMARKER_MODEL_NAME: &str = "face_landmarker.task";
pub const FACE_LANDMARKER_MODEL_URL: &str =
    "https://storage.googleapis.com/mediapipe-models/face_landmarker/face_landmarker/float16/1/face_landmarker.task";

/// Models directory, relative to the project root (the process working directory).
pub const MODELS_DIR: &str = "models";

/// Both backends track a single face.
pub const MAX_NUM_FACES: usize = 1;

pub const MIN_DETECTION_CONFIDENCE: f32 = 0.5;
pub const MIN_TRACKING_CONFIDENCE: f32 = 0.5;
pub const MIN_FACE_PRESENCE_CONFIDENCE: f32 = 0.5;

pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;
