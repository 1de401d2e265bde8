use rand::Rng;

pub const TIPS: [&str; 8] = [
    "Mantén una buena hidratación durante todo el día",
    "Duerme 7-9 horas para una mejor recuperación",
    "Come proteína después de entrenamientos de fuerza",
    "Estira 5-10 minutos después de cada sesión",
    "Escucha a tu cuerpo y respeta los días de descanso",
    "Calienta 5-7 minutos antes de cada entrenamiento",
    "Mantén un ritmo sostenible en entrenamientos Z2",
    "Anota tus sensaciones para mejorar el plan",
];

pub fn tip_at(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}

pub fn random_tip() -> &'static str {
    tip_at(rand::thread_rng().gen_range(0..TIPS.len()))
}
