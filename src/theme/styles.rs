//! Global CSS styles for the card.
//!
//! Lavender greeting-card aesthetic: white panels on a soft purple wash,
//! entrance animation on each stage, staggered child reveals.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LAVENDER (Backgrounds) */
  --lavender: #e6e6fa;
  --lavender-deep: #d8d0f0;
  --card-white: #ffffff;

  /* PURPLE (Accents, Text) */
  --purple-light: #c084fc;
  --purple: #9333ea;
  --purple-deep: #6b21a8;
  --purple-border: #d8b4fe;

  /* SEMANTIC */
  --danger: #ef4444;
  --danger-soft: #fef2f2;

  /* Typography */
  --font-sans: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --stage-enter: 500ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--lavender);
  color: var(--purple-deep);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Shell === */
.card-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: linear-gradient(180deg, var(--lavender) 0%, var(--lavender-deep) 100%);
}

.card-frame {
  width: 100%;
  max-width: 28rem;
  margin: 0 auto;
}

/* === Stage entrance === */
.card-enter {
  animation: stage-enter var(--stage-enter) ease both;
}

@keyframes stage-enter {
  from {
    transform: scale(0.8);
    opacity: 0;
  }
  to {
    transform: scale(1);
    opacity: 1;
  }
}

/* Staggered child reveals inside a stage */
.reveal {
  animation: rise 500ms ease backwards;
}

.reveal-1 { animation-delay: 0.2s; }
.reveal-2 { animation-delay: 0.4s; }
.reveal-3 { animation-delay: 0.6s; }

@keyframes rise {
  from {
    transform: translateY(20px);
    opacity: 0;
  }
  to {
    transform: translateY(0);
    opacity: 1;
  }
}

/* === Panels === */
.stage {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.card-panel {
  width: 100%;
  background: var(--card-white);
  border: 2px solid var(--purple-border);
  border-radius: 0.75rem;
  box-shadow: 0 10px 25px rgba(107, 33, 168, 0.15);
  padding: 2rem;
}

.headline {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--purple-deep);
  text-align: center;
  margin-bottom: 1.5rem;
}

.subtitle {
  font-size: 1.25rem;
  color: var(--purple);
  text-align: center;
  margin-bottom: 2rem;
}

.panel-actions {
  display: flex;
  justify-content: center;
}

/* === Gift === */
.gift-stage {
  gap: 1.5rem;
}

.gift-box {
  width: 16rem;
  height: 16rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: var(--card-white);
  border: 2px solid var(--purple-border);
  border-radius: 0.75rem;
  box-shadow: 0 10px 25px rgba(107, 33, 168, 0.15);
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.gift-box:hover { transform: scale(1.05); }
.gift-box:active { transform: scale(0.95); }

.gift-icon {
  font-size: 5rem;
  margin-bottom: 1rem;
}

.gift-hint {
  font-size: 1.25rem;
  font-weight: 500;
  color: var(--purple);
}

/* === Letter === */
.letter {
  max-height: 50vh;
  overflow-y: auto;
  background: #faf5ff;
  border: 1px solid var(--purple-border);
  border-radius: 0.5rem;
  padding: 1rem;
  margin-bottom: 1.5rem;
  font-size: 1.05rem;
  color: var(--purple-deep);
}

.letter-paragraph {
  margin-bottom: 1rem;
}

.letter-signoff {
  text-align: right;
  font-weight: 500;
}

/* === Buttons === */
.btn-primary {
  background: var(--purple);
  color: var(--card-white);
  border: none;
  border-radius: 0.5rem;
  padding: 0.6rem 1.2rem;
  font-size: 1rem;
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  transition: background var(--transition-fast);
}

.btn-primary:hover { background: var(--purple-deep); }

.btn-outline {
  background: var(--card-white);
  color: var(--purple-deep);
  border: 1px solid var(--purple-border);
  border-radius: 0.5rem;
  padding: 0.5rem 1rem;
  font-size: 0.95rem;
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
}

/* === Audio controls === */
.audio-dock {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 10;
}

.audio-prompt {
  position: fixed;
  top: 4rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  background: var(--card-white);
  border: 2px solid var(--purple-border);
  border-radius: 0.5rem;
  box-shadow: 0 4px 12px rgba(107, 33, 168, 0.2);
  padding: 0.75rem 1rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.prompt-link {
  background: none;
  border: none;
  color: var(--purple-deep);
  font-weight: 500;
  font-size: 1rem;
  cursor: pointer;
}

.audio-error {
  position: fixed;
  top: 7.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  max-width: 20rem;
  background: var(--danger-soft);
  border: 2px solid #fca5a5;
  border-radius: 0.5rem;
  box-shadow: 0 4px 12px rgba(239, 68, 68, 0.2);
  padding: 0.75rem 1rem;
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.audio-error-icon { color: var(--danger); }

.audio-error-title {
  color: #b91c1c;
  font-weight: 600;
}

.audio-error-text,
.audio-error-hint {
  color: var(--danger);
  font-size: 0.875rem;
}

.audio-error-hint { margin-top: 0.25rem; }

/* === Confetti === */
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  width: 0.5rem;
  height: 0.75rem;
  border-radius: 2px;
  animation: confetti-fall linear forwards;
}

@keyframes confetti-fall {
  from {
    transform: translate(0, 0) rotate(0deg);
    opacity: 1;
  }
  to {
    transform: translate(var(--drift, 0px), 70vh) rotate(540deg);
    opacity: 0;
  }
}

/* === Balloons === */
.balloon-strip {
  position: relative;
  height: 8rem;
  margin-top: 2rem;
  overflow: hidden;
  width: 100%;
}

.balloon {
  position: absolute;
  bottom: -4rem;
  width: 2.5rem;
  height: 3rem;
  border-radius: 50% 50% 50% 50% / 45% 45% 55% 55%;
  animation-name: balloon-float;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
}

.balloon::after {
  content: "";
  position: absolute;
  left: 50%;
  bottom: -0.9rem;
  width: 1px;
  height: 1rem;
  background: rgba(107, 33, 168, 0.4);
}

@keyframes balloon-float {
  0% {
    transform: translateY(0);
  }
  50% {
    transform: translateY(-7rem) rotate(4deg);
  }
  100% {
    transform: translateY(0);
  }
}
"#;
