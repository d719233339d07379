use crate::geometry::{angle_to_horizontal, joint_angle};

use super::landmark::JointSet;

/// 表示する角度の種類（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    /// 腰 → 肩 の水平からの傾き
    BackAngle,
    /// 腰-肩-肘
    ShoulderAngle,
    /// 腰-膝-足首
    KneeExtension,
    /// 肩-肘-手首
    ArmAngle,
}

impl AngleKind {
    pub const ORDER: [AngleKind; 4] = [
        Self::BackAngle,
        Self::ShoulderAngle,
        Self::KneeExtension,
        Self::ArmAngle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BackAngle => "Back Angle",
            Self::ShoulderAngle => "Shoulder Angle",
            Self::KneeExtension => "Knee Extension",
            Self::ArmAngle => "Arm Angle",
        }
    }

    /// この角度を関節セットから計算
    pub fn measure(self, joints: &JointSet) -> Option<f64> {
        match self {
            Self::BackAngle => angle_to_horizontal(joints.hip, joints.shoulder),
            Self::ShoulderAngle => joint_angle(joints.hip, joints.shoulder, joints.elbow),
            Self::KneeExtension => joint_angle(joints.hip, joints.knee, joints.ankle),
            Self::ArmAngle => joint_angle(joints.shoulder, joints.elbow, joints.wrist),
        }
    }
}

/// 1フレーム分の角度値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleReading {
    pub kind: AngleKind,
    /// 度。退化した入力（長さ0のベクトル）では None
    pub degrees: Option<f64>,
}

impl AngleReading {
    /// パネル表示用のテキスト（整数に丸める）
    pub fn display_text(&self) -> String {
        match self.degrees {
            Some(deg) => format!("{}: {}", self.kind.label(), deg.round() as i64),
            None => format!("{}: --", self.kind.label()),
        }
    }
}

/// 表示順に並んだ4つの角度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleReadings(pub [AngleReading; 4]);

impl AngleReadings {
    pub fn compute(joints: &JointSet) -> Self {
        Self(AngleKind::ORDER.map(|kind| AngleReading {
            kind,
            degrees: kind.measure(joints),
        }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AngleReading> {
        self.0.iter()
    }
}
