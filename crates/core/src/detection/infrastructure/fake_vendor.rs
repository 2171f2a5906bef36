//! In-memory vendor library for tests: records what the facade asks of it
//! and replays scripted detector output.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ndarray::{Array3, ArrayView3};

use crate::detection::domain::face_landmarks::{DetectionResult, FaceLandmarks, Landmark};
use crate::detection::domain::vendor::{
    FaceLandmarker, FaceLandmarkerOptions, FaceLandmarkerResult, FaceMeshOptions, LegacyFaceMesh,
    NormalizedLandmark, SolutionsApi, TasksApi, VendorError, VendorLibrary,
};
use crate::shared::rgb_image::RgbImage;

#[derive(Default)]
pub(crate) struct Recorder {
    solutions_lookups: AtomicUsize,
    legacy_constructions: AtomicUsize,
    tasks_constructions: AtomicUsize,
    face_mesh_options: Mutex<Vec<FaceMeshOptions>>,
    landmarker_options: Mutex<Vec<FaceLandmarkerOptions>>,
    images: Mutex<Vec<Array3<u8>>>,
}

impl Recorder {
    pub(crate) fn face_mesh_options(&self) -> Vec<FaceMeshOptions> {
        self.face_mesh_options.lock().unwrap().clone()
    }

    pub(crate) fn landmarker_options(&self) -> Vec<FaceLandmarkerOptions> {
        self.landmarker_options.lock().unwrap().clone()
    }

    /// Images handed to either detector, in call order.
    pub(crate) fn images(&self) -> Vec<Array3<u8>> {
        self.images.lock().unwrap().clone()
    }
}

/// `(x, y, z)` as the legacy API reports them.
pub(crate) fn sample_legacy_result() -> DetectionResult {
    DetectionResult::new(vec![FaceLandmarks::new(vec![
        Landmark::new(0.25, 0.5, -0.03),
        Landmark::new(0.75, 0.125, 0.0),
    ])])
}

/// The same points as the task API reports them, second one without depth.
pub(crate) fn sample_tasks_result() -> FaceLandmarkerResult {
    FaceLandmarkerResult {
        face_landmarks: vec![vec![
            NormalizedLandmark {
                x: 0.25,
                y: 0.5,
                z: Some(-0.03),
            },
            NormalizedLandmark {
                x: 0.75,
                y: 0.125,
                z: None,
            },
        ]],
    }
}

pub(crate) struct FakeVendor {
    recorder: Arc<Recorder>,
    solutions: Option<FakeSolutions>,
    tasks: Option<FakeTasks>,
    single_solutions_lookup: bool,
}

impl FakeVendor {
    /// A release that still ships both API generations.
    pub(crate) fn legacy() -> Self {
        let recorder = Arc::new(Recorder::default());
        Self {
            solutions: Some(FakeSolutions {
                recorder: recorder.clone(),
                result: sample_legacy_result(),
            }),
            tasks: Some(FakeTasks::new(recorder.clone())),
            recorder,
            single_solutions_lookup: false,
        }
    }

    /// A release that removed the legacy API.
    pub(crate) fn tasks_only() -> Self {
        let recorder = Arc::new(Recorder::default());
        Self {
            solutions: None,
            tasks: Some(FakeTasks::new(recorder.clone())),
            recorder,
            single_solutions_lookup: false,
        }
    }

    /// No vendor library installed at all.
    pub(crate) fn missing() -> Self {
        Self {
            recorder: Arc::new(Recorder::default()),
            solutions: None,
            tasks: None,
            single_solutions_lookup: false,
        }
    }

    pub(crate) fn with_tasks_result(mut self, result: FaceLandmarkerResult) -> Self {
        if let Some(tasks) = self.tasks.as_mut() {
            tasks.result = result;
        }
        self
    }

    pub(crate) fn with_detect_error(mut self, message: &'static str) -> Self {
        if let Some(tasks) = self.tasks.as_mut() {
            tasks.detect_error = Some(message);
        }
        self
    }

    pub(crate) fn with_rejected_landmarker(mut self) -> Self {
        if let Some(tasks) = self.tasks.as_mut() {
            tasks.reject_create = true;
        }
        self
    }

    /// The legacy entry point disappears after the first lookup.
    pub(crate) fn with_single_solutions_lookup(mut self) -> Self {
        self.single_solutions_lookup = true;
        self
    }

    pub(crate) fn recorder(&self) -> Arc<Recorder> {
        self.recorder.clone()
    }

    pub(crate) fn solutions_lookups(&self) -> usize {
        self.recorder.solutions_lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn legacy_constructions(&self) -> usize {
        self.recorder.legacy_constructions.load(Ordering::SeqCst)
    }

    pub(crate) fn tasks_constructions(&self) -> usize {
        self.recorder.tasks_constructions.load(Ordering::SeqCst)
    }
}

impl VendorLibrary for FakeVendor {
    fn solutions(&self) -> Result<&dyn SolutionsApi, VendorError> {
        let earlier = self
            .recorder
            .solutions_lookups
            .fetch_add(1, Ordering::SeqCst);
        if self.single_solutions_lookup && earlier > 0 {
            return Err("solutions entry point no longer reachable".into());
        }
        match &self.solutions {
            Some(s) => Ok(s as &dyn SolutionsApi),
            None => Err("solutions API not present in this release".into()),
        }
    }

    fn tasks(&self) -> Result<&dyn TasksApi, VendorError> {
        match &self.tasks {
            Some(t) => Ok(t as &dyn TasksApi),
            None => Err("vendor library not installed".into()),
        }
    }
}

struct FakeSolutions {
    recorder: Arc<Recorder>,
    result: DetectionResult,
}

impl SolutionsApi for FakeSolutions {
    fn face_mesh(&self, options: FaceMeshOptions) -> Result<Box<dyn LegacyFaceMesh>, VendorError> {
        self.recorder
            .legacy_constructions
            .fetch_add(1, Ordering::SeqCst);
        self.recorder.face_mesh_options.lock().unwrap().push(options);
        Ok(Box::new(FakeLegacyMesh {
            recorder: self.recorder.clone(),
            result: self.result.clone(),
        }))
    }
}

struct FakeTasks {
    recorder: Arc<Recorder>,
    result: FaceLandmarkerResult,
    detect_error: Option<&'static str>,
    reject_create: bool,
}

impl FakeTasks {
    fn new(recorder: Arc<Recorder>) -> Self {
        Self {
            recorder,
            result: sample_tasks_result(),
            detect_error: None,
            reject_create: false,
        }
    }
}

impl TasksApi for FakeTasks {
    fn create_face_landmarker(
        &self,
        options: FaceLandmarkerOptions,
    ) -> Result<Box<dyn FaceLandmarker>, VendorError> {
        self.recorder.tasks_constructions.fetch_add(1, Ordering::SeqCst);
        self.recorder.landmarker_options.lock().unwrap().push(options);
        if self.reject_create {
            return Err("unable to open model asset".into());
        }
        Ok(Box::new(FakeLandmarker {
            recorder: self.recorder.clone(),
            result: self.result.clone(),
            detect_error: self.detect_error,
        }))
    }
}

struct FakeLegacyMesh {
    recorder: Arc<Recorder>,
    result: DetectionResult,
}

impl LegacyFaceMesh for FakeLegacyMesh {
    fn process(&mut self, rgb: ArrayView3<'_, u8>) -> Result<DetectionResult, VendorError> {
        self.recorder.images.lock().unwrap().push(rgb.to_owned());
        Ok(self.result.clone())
    }
}

struct FakeLandmarker {
    recorder: Arc<Recorder>,
    result: FaceLandmarkerResult,
    detect_error: Option<&'static str>,
}

impl FaceLandmarker for FakeLandmarker {
    fn detect(&mut self, image: &RgbImage<'_>) -> Result<FaceLandmarkerResult, VendorError> {
        self.recorder.images.lock().unwrap().push(image.view().to_owned());
        match self.detect_error {
            Some(message) => Err(message.into()),
            None => Ok(self.result.clone()),
        }
    }
}
