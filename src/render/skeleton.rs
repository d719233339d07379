use crate::pose::Landmark;

use super::canvas::Color;

/// 骨格の接続定義 (開始ランドマーク, 終了ランドマーク)
pub const SKELETON_CONNECTIONS: [(Landmark, Landmark); 7] = [
    // 上半身（肩 → 肘 → 手首）
    (Landmark::RightShoulder, Landmark::RightElbow),
    (Landmark::RightElbow, Landmark::RightWrist),
    // 胴体
    (Landmark::RightShoulder, Landmark::RightHip),
    // 下半身（腰 → 膝 → 足首 → 足先）
    (Landmark::RightHip, Landmark::RightKnee),
    (Landmark::RightKnee, Landmark::RightAnkle),
    (Landmark::RightAnkle, Landmark::RightHeel),
    (Landmark::RightHeel, Landmark::RightFootIndex),
];

/// 関節マーカーの色
pub const JOINT_COLOR: Color = Color::rgb(0, 255, 0); // 緑

/// 骨格線の色
pub const SKELETON_COLOR: Color = Color::rgb(0, 0, 255); // 青

pub const JOINT_RADIUS: i32 = 6;

pub const SKELETON_THICKNESS: i32 = 2;

/// 接続に含まれるランドマーク（重複なし、初出順）
pub fn connected_landmarks(connections: &[(Landmark, Landmark)]) -> Vec<Landmark> {
    let mut landmarks = Vec::new();
    for &(start, end) in connections {
        for lm in [start, end] {
            if !landmarks.contains(&lm) {
                landmarks.push(lm);
            }
        }
    }
    landmarks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_landmarks_dedup() {
        let landmarks = connected_landmarks(&SKELETON_CONNECTIONS);
        assert_eq!(
            landmarks,
            vec![
                Landmark::RightShoulder,
                Landmark::RightElbow,
                Landmark::RightWrist,
                Landmark::RightHip,
                Landmark::RightKnee,
                Landmark::RightAnkle,
                Landmark::RightHeel,
                Landmark::RightFootIndex,
            ]
        );
    }

    #[test]
    fn test_skeleton_covers_required_joints() {
        let landmarks = connected_landmarks(&SKELETON_CONNECTIONS);
        for joint in crate::pose::JointSet::REQUIRED {
            assert!(landmarks.contains(&joint), "{:?} missing", joint);
        }
    }
}
