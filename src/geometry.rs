use crate::pose::PixelPoint;

/// 2点 a → b のベクトルが水平方向 (1, 0) と成す角度（度）
///
/// 画像座標は y が下向きに増えるため、b が a より下にある場合は負値を返す。
/// 結果は [-180, 180]。a と b が同一点なら None。
pub fn angle_to_horizontal(a: PixelPoint, b: PixelPoint) -> Option<f64> {
    let (vx, vy) = b.vector_from(a);
    let norm = vx.hypot(vy);
    if norm == 0.0 {
        return None;
    }

    let cosine = (vx / norm).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees();

    if vy > 0.0 {
        Some(-degrees)
    } else {
        Some(degrees)
    }
}

/// b を頂点とし、b→a と b→c の2本の半直線が成す内角（度）
///
/// 結果は [0, 180]。どちらかの半直線の長さが0なら None。
pub fn joint_angle(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> Option<f64> {
    let (bax, bay) = a.vector_from(b);
    let (bcx, bcy) = c.vector_from(b);

    let norm = bax.hypot(bay) * bcx.hypot(bcy);
    if norm == 0.0 {
        return None;
    }

    let cosine = ((bax * bcx + bay * bcy) / norm).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}
