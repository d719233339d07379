/// 全身33ランドマークのインデックス（姿勢推定モデルの出力順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum Landmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl Landmark {
    pub const COUNT: usize = 33;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// 正規化座標のランドマーク
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedLandmark {
    /// 正規化されたX座標 (0.0〜1.0、モデル次第で範囲外もあり得る)
    pub x: f32,
    /// 正規化されたY座標
    pub y: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// ピクセル座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// origin から self へのベクトル
    pub fn vector_from(self, origin: PixelPoint) -> (f64, f64) {
        (
            self.x as f64 - origin.x as f64,
            self.y as f64 - origin.y as f64,
        )
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// 正規化座標をピクセル座標に変換（切り捨て、クランプなし）
pub fn project(landmark: &NormalizedLandmark, width: u32, height: u32) -> PixelPoint {
    let px = (landmark.x as f64 * width as f64).floor() as i32;
    let py = (landmark.y as f64 * height as f64).floor() as i32;
    PixelPoint::new(px, py)
}

/// 1人分のランドマーク列（モデル出力順）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseLandmarks {
    pub landmarks: Vec<NormalizedLandmark>,
}

impl PoseLandmarks {
    pub fn new(landmarks: Vec<NormalizedLandmark>) -> Self {
        Self { landmarks }
    }

    pub fn get(&self, landmark: Landmark) -> Option<&NormalizedLandmark> {
        self.landmarks.get(landmark.index())
    }

    /// 全ランドマークをピクセル座標に変換
    pub fn project(&self, width: u32, height: u32) -> ProjectedPose {
        let points = self
            .landmarks
            .iter()
            .take(Landmark::COUNT)
            .map(|lm| project(lm, width, height))
            .collect();
        ProjectedPose { points }
    }
}

/// 1フレーム分のピクセル座標ランドマーク
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPose {
    points: Vec<PixelPoint>,
}

impl ProjectedPose {
    pub fn get(&self, landmark: Landmark) -> Option<PixelPoint> {
        self.points.get(landmark.index()).copied()
    }
}

/// 角度計算に必要な6関節（右半身）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSet {
    pub wrist: PixelPoint,
    pub elbow: PixelPoint,
    pub shoulder: PixelPoint,
    pub hip: PixelPoint,
    pub knee: PixelPoint,
    pub ankle: PixelPoint,
}

impl JointSet {
    pub const REQUIRED: [Landmark; 6] = [
        Landmark::RightWrist,
        Landmark::RightElbow,
        Landmark::RightShoulder,
        Landmark::RightHip,
        Landmark::RightKnee,
        Landmark::RightAnkle,
    ];

    /// 6関節すべてが揃っている場合のみ Some
    pub fn from_projected(pose: &ProjectedPose) -> Option<Self> {
        let [wrist, elbow, shoulder, hip, knee, ankle] = Self::REQUIRED.map(|lm| pose.get(lm));
        Some(Self {
            wrist: wrist?,
            elbow: elbow?,
            shoulder: shoulder?,
            hip: hip?,
            knee: knee?,
            ankle: ankle?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index() {
        assert_eq!(Landmark::COUNT, 33);
        assert_eq!(Landmark::Nose.index(), 0);
        assert_eq!(Landmark::RightShoulder.index(), 12);
        assert_eq!(Landmark::RightFootIndex.index(), Landmark::COUNT - 1);
    }

    #[test]
    fn test_required_joint_indices() {
        let indices: Vec<usize> = JointSet::REQUIRED.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![16, 14, 12, 24, 26, 28]);
    }

    #[test]
    fn test_project() {
        let lm = NormalizedLandmark::new(0.5, 0.25);
        assert_eq!(project(&lm, 640, 480), PixelPoint::new(320, 120));
    }

    #[test]
    fn test_project_truncates() {
        let lm = NormalizedLandmark::new(0.999, 0.0015);
        assert_eq!(project(&lm, 100, 1000), PixelPoint::new(99, 1));
    }

    #[test]
    fn test_project_out_of_frame() {
        let lm = NormalizedLandmark::new(-0.25, 1.5);
        assert_eq!(project(&lm, 400, 200), PixelPoint::new(-100, 300));
    }

    #[test]
    fn test_project_round_trip_exact() {
        let (w, h) = (256u32, 128u32);
        for px in 0..w as i32 {
            for py in (0..h as i32).step_by(7) {
                let lm = NormalizedLandmark::new(px as f32 / w as f32, py as f32 / h as f32);
                assert_eq!(project(&lm, w, h), PixelPoint::new(px, py));
            }
        }
    }

    /// px/w は f32 で真値より僅かに小さくなることがあり、切り捨てで1ピクセル下がる。
    /// int(x * w) と同じ挙動なので許容する
    #[test]
    fn test_project_round_trip_within_one_pixel() {
        let (w, h) = (1920u32, 1080u32);
        for px in (0..w as i32).step_by(13) {
            for py in (0..h as i32).step_by(11) {
                let lm = NormalizedLandmark::new(px as f32 / w as f32, py as f32 / h as f32);
                let p = project(&lm, w, h);
                assert!((p.x - px).abs() <= 1, "px={px} got={}", p.x);
                assert!((p.y - py).abs() <= 1, "py={py} got={}", p.y);
            }
        }
    }

    fn full_pose() -> PoseLandmarks {
        let landmarks = (0..Landmark::COUNT)
            .map(|i| NormalizedLandmark::new(i as f32 / 64.0, 0.5))
            .collect();
        PoseLandmarks::new(landmarks)
    }

    #[test]
    fn test_joint_set_complete() {
        let projected = full_pose().project(64, 10);
        let joints = JointSet::from_projected(&projected).unwrap();
        assert_eq!(joints.wrist, PixelPoint::new(16, 5));
        assert_eq!(joints.elbow, PixelPoint::new(14, 5));
        assert_eq!(joints.shoulder, PixelPoint::new(12, 5));
        assert_eq!(joints.hip, PixelPoint::new(24, 5));
        assert_eq!(joints.knee, PixelPoint::new(26, 5));
        assert_eq!(joints.ankle, PixelPoint::new(28, 5));
    }

    #[test]
    fn test_joint_set_each_required_joint_is_mandatory() {
        for required in JointSet::REQUIRED {
            let projected = full_pose().project(64, 10);
            let mut points = projected.points.clone();
            // 必須関節以降を落とす
            points.truncate(required.index());
            let partial = ProjectedPose { points };
            assert!(JointSet::from_projected(&partial).is_none(), "{:?}", required);
        }
    }

    #[test]
    fn test_joint_set_incomplete() {
        let mut pose = full_pose();
        pose.landmarks.truncate(Landmark::RightAnkle.index());
        let projected = pose.project(64, 10);
        assert!(projected.get(Landmark::RightKnee).is_some());
        assert!(JointSet::from_projected(&projected).is_none());
    }

    #[test]
    fn test_pixel_point_vector_from() {
        let a = PixelPoint::new(3, 10);
        let b = PixelPoint::new(5, 4);
        assert_eq!(a.vector_from(b), (-2.0, 6.0));
        assert_eq!(a.offset(1, -1), PixelPoint::new(4, 9));
    }
}
