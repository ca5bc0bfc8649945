//! Orbit camera and per-frame camera snapshots

use glam::{Mat4, Vec2, Vec3};

/// Screen rectangle the projection maps onto (pixels, top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport covering a whole window of the given size
    pub fn full(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    /// Width over height, 1.0 for an empty viewport
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Camera state captured for a single frame.
///
/// Matrices are stored column-major as flat arrays, the same layout as
/// [`Mat4::to_cols_array`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    /// World to view transform
    pub view: [f32; 16],
    /// View to clip transform
    pub projection: [f32; 16],
    /// Target rectangle; the whole window when `None`
    pub viewport: Option<Viewport>,
}

impl CameraSnapshot {
    /// Capture view and projection matrices
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view: view.to_cols_array(),
            projection: projection.to_cols_array(),
            viewport: None,
        }
    }

    /// Set an explicit viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// View matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.view)
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.projection)
    }

    /// Viewport to map onto, falling back to the full window
    pub fn resolved_viewport(&self, window_size: Vec2) -> Viewport {
        self.viewport.unwrap_or_else(|| Viewport::full(window_size))
    }
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

/// Closest the eye may get to the target (mm)
const MIN_DISTANCE: f32 = 10.0;
/// Farthest the eye may get from the target (mm), 50 m
const MAX_DISTANCE: f32 = 50_000.0;
/// Elevation limit; keeps the eye off the Z pole where `look_at` degenerates
const PITCH_LIMIT_DEG: f32 = 89.0;
/// Target travel per dragged pixel, as a fraction of the eye distance
const PAN_PER_PIXEL: f32 = 0.002;
/// Distance change per scroll unit, as a fraction of the eye distance
const ZOOM_STEP: f32 = 0.1;

/// Orbit camera around a target point, Z up, millimeter scale.
///
/// The eye sits on a sphere of radius `distance` around `target`; `yaw`
/// turns it about Z and `pitch` lifts it off the XY plane. Limits are sized
/// for enclosures between a few millimetres and a few metres across.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Eye position, derived from the orbit state
    pub position: Vec3,
    /// Point orbited around
    pub target: Vec3,
    /// World up direction
    pub up: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Near clipping plane distance (mm)
    pub near: f32,
    /// Far clipping plane distance (mm)
    pub far: f32,
    /// Rotation around Z (radians)
    pub yaw: f32,
    /// Elevation above the XY plane (radians)
    pub pitch: f32,
    /// Distance from eye to target (mm)
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera half a metre out, looking at the origin from the front-right
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov: 40.0_f32.to_radians(),
            near: 1.0,
            far: 100_000.0,
            yaw: -60.0_f32.to_radians(),
            pitch: 35.0_f32.to_radians(),
            distance: 500.0,
        };
        camera.place_eye();
        camera
    }

    /// Swing the eye around the target by the given angles (radians).
    ///
    /// Pitch stops just short of straight up or down.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let limit = PITCH_LIMIT_DEG.to_radians();
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-limit, limit);
        self.place_eye();
    }

    /// Slide the target in the screen plane by a pixel drag.
    ///
    /// Travel scales with the eye distance, so a drag moves the scene by a
    /// similar on-screen amount whether the view shows a 10 mm seal or a
    /// whole layout.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.position).normalize();
        let screen_right = forward.cross(self.up).normalize();
        let screen_up = screen_right.cross(forward);

        let mm_per_pixel = self.distance * PAN_PER_PIXEL;
        self.target += (screen_up * delta_y - screen_right * delta_x) * mm_per_pixel;
        self.place_eye();
    }

    /// Move the eye toward (positive `delta`) or away from the target
    pub fn zoom(&mut self, delta: f32) {
        let distance = self.distance * (1.0 - delta * ZOOM_STEP);
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.place_eye();
    }

    /// Center on a bounding sphere (mm) with some margin around it
    pub fn fit_all(&mut self, center: Vec3, radius: f32) {
        self.target = center;
        self.distance = (radius * 2.5).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.place_eye();
    }

    /// Look straight down onto the XY plane
    pub fn set_top_view(&mut self) {
        self.set_angles(-90.0, PITCH_LIMIT_DEG);
    }

    /// Look along +Y at the front faces
    pub fn set_front_view(&mut self) {
        self.set_angles(-90.0, 0.0);
    }

    /// Look along -X at the right-hand faces
    pub fn set_side_view(&mut self) {
        self.set_angles(0.0, 0.0);
    }

    fn set_angles(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg.to_radians();
        self.pitch = pitch_deg.to_radians();
        self.place_eye();
    }

    fn place_eye(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let offset = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch);
        self.position = self.target + offset * self.distance;
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Capture the current state for projecting onto `viewport`
    pub fn snapshot(&self, viewport: Viewport) -> CameraSnapshot {
        CameraSnapshot::new(self.view_matrix(), self.projection_matrix(viewport.aspect()))
            .with_viewport(viewport)
    }
}
